use uuid::Uuid;

use jot_storage::queries;

use crate::{JotService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteListRequest {
	pub user_id: Uuid,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteListItem {
	pub note_id: Uuid,
	pub title: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NoteListResponse {
	pub items: Vec<NoteListItem>,
}

impl JotService {
	/// Sidebar listing for one user, insertion-ordered. Only the owner's
	/// notes are ever returned.
	pub async fn list_notes(&self, req: NoteListRequest) -> Result<NoteListResponse> {
		let rows = queries::list_notes_for_user(&self.db, req.user_id).await?;
		let items = rows
			.into_iter()
			.map(|row| NoteListItem { note_id: row.note_id, title: row.title })
			.collect();

		Ok(NoteListResponse { items })
	}
}
