pub mod auth;
pub mod create;
pub mod delete;
pub mod list;
pub mod notes;

mod error;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse};
pub use create::{CreateNoteRequest, CreateNoteResponse};
pub use delete::{DeleteNoteRequest, DeleteNoteResponse};
pub use error::{Error, Result};
pub use list::{NoteListItem, NoteListRequest, NoteListResponse};
pub use notes::{NoteFetchRequest, NoteFetchResponse};

use jot_storage::db::Db;

/// The application service. One instance per process, shared across request
/// handlers. Every operation takes the acting user's id as plain input;
/// resolving identity from the request is the caller's job.
pub struct JotService {
	pub db: Db,
}
impl JotService {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
