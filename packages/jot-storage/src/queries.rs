use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{Note, NoteListRow, User},
};

/// Email uniqueness is enforced by the index, so a concurrent signup race
/// surfaces here as a conflict rather than a plain database error.
pub async fn insert_user(db: &Db, user: &User) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO users (user_id, email, password_hash, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5)",
	)
	.bind(user.user_id)
	.bind(user.email.as_str())
	.bind(user.password_hash.as_str())
	.bind(user.created_at)
	.bind(user.updated_at)
	.execute(&db.pool)
	.await
	.map_err(|err| match err {
		sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() =>
			Error::Conflict(format!("Email {} is already registered.", user.email)),
		err => Error::Sqlx(err),
	})?;

	Ok(())
}

pub async fn find_user_by_email(db: &Db, email: &str) -> Result<Option<User>> {
	let user = sqlx::query_as("SELECT * FROM users WHERE email = $1")
		.bind(email)
		.fetch_optional(&db.pool)
		.await?;

	Ok(user)
}

pub async fn find_user_by_id(db: &Db, user_id: Uuid) -> Result<Option<User>> {
	let user = sqlx::query_as("SELECT * FROM users WHERE user_id = $1")
		.bind(user_id)
		.fetch_optional(&db.pool)
		.await?;

	Ok(user)
}

pub async fn insert_note(db: &Db, note: &Note) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO notes (note_id, user_id, title, body, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6)",
	)
	.bind(note.note_id)
	.bind(note.user_id)
	.bind(note.title.as_str())
	.bind(note.body.as_str())
	.bind(note.created_at)
	.bind(note.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

/// Sidebar listing, insertion-ordered. The id tie-break keeps the order
/// deterministic for rows created inside the same timestamp tick.
pub async fn list_notes_for_user(db: &Db, user_id: Uuid) -> Result<Vec<NoteListRow>> {
	let rows = sqlx::query_as(
		"\
SELECT note_id, title
FROM notes
WHERE user_id = $1
ORDER BY created_at ASC, note_id ASC",
	)
	.bind(user_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn find_note_for_user(db: &Db, note_id: Uuid, user_id: Uuid) -> Result<Option<Note>> {
	let note = sqlx::query_as("SELECT * FROM notes WHERE note_id = $1 AND user_id = $2")
		.bind(note_id)
		.bind(user_id)
		.fetch_optional(&db.pool)
		.await?;

	Ok(note)
}

/// Ownership-filtered delete. Returns the number of rows removed; deleting
/// someone else's note removes nothing.
pub async fn delete_note_for_user(db: &Db, note_id: Uuid, user_id: Uuid) -> Result<u64> {
	let result = sqlx::query("DELETE FROM notes WHERE note_id = $1 AND user_id = $2")
		.bind(note_id)
		.bind(user_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected())
}
