use time::OffsetDateTime;
use uuid::Uuid;

use jot_domain::NoteDraft;
use jot_storage::{models::Note, queries};

use crate::{JotService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateNoteRequest {
	pub user_id: Uuid,
	pub title: Option<String>,
	pub body: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateNoteResponse {
	pub note_id: Uuid,
}

impl JotService {
	/// Validation short-circuits on the first failing field (title before
	/// body); nothing is written unless both fields pass.
	pub async fn create_note(&self, req: CreateNoteRequest) -> Result<CreateNoteResponse> {
		let valid = jot_domain::validate_note(NoteDraft { title: req.title, body: req.body })?;
		let now = OffsetDateTime::now_utc();
		let note = Note {
			note_id: Uuid::new_v4(),
			user_id: req.user_id,
			title: valid.title,
			body: valid.body,
			created_at: now,
			updated_at: now,
		};

		queries::insert_note(&self.db, &note).await?;

		tracing::info!(note_id = %note.note_id, user_id = %note.user_id, "Created note.");

		Ok(CreateNoteResponse { note_id: note.note_id })
	}
}
