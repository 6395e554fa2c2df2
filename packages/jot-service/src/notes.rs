use time::OffsetDateTime;
use uuid::Uuid;

use jot_storage::queries;

use crate::{Error, JotService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteFetchRequest {
	pub note_id: Uuid,
	pub user_id: Uuid,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteFetchResponse {
	pub note_id: Uuid,
	pub title: String,
	pub body: String,
	pub updated_at: OffsetDateTime,
}

impl JotService {
	/// Ownership-filtered fetch. Another user's note and a missing note are
	/// indistinguishable to the caller.
	pub async fn get_note(&self, req: NoteFetchRequest) -> Result<NoteFetchResponse> {
		let Some(note) =
			queries::find_note_for_user(&self.db, req.note_id, req.user_id).await?
		else {
			return Err(Error::NotFound { message: "Unknown note_id.".to_string() });
		};

		Ok(NoteFetchResponse {
			note_id: note.note_id,
			title: note.title,
			body: note.body,
			updated_at: note.updated_at,
		})
	}
}
