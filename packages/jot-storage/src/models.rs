use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct User {
	pub user_id: Uuid,
	pub email: String,
	pub password_hash: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Note {
	pub note_id: Uuid,
	pub user_id: Uuid,
	pub title: String,
	pub body: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// The sidebar projection of a note.
#[derive(Debug, sqlx::FromRow)]
pub struct NoteListRow {
	pub note_id: Uuid,
	pub title: String,
}
