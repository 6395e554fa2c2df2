use uuid::Uuid;

use jot_storage::queries;

use crate::{JotService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DeleteNoteRequest {
	pub note_id: Uuid,
	pub user_id: Uuid,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DeleteNoteResponse {
	pub deleted: bool,
}

impl JotService {
	/// Ownership-filtered delete. Removing a note that is already gone (or
	/// was never yours) is not an error.
	pub async fn delete_note(&self, req: DeleteNoteRequest) -> Result<DeleteNoteResponse> {
		let removed = queries::delete_note_for_user(&self.db, req.note_id, req.user_id).await?;

		if removed > 0 {
			tracing::info!(note_id = %req.note_id, user_id = %req.user_id, "Deleted note.");
		}

		Ok(DeleteNoteResponse { deleted: removed > 0 })
	}
}
