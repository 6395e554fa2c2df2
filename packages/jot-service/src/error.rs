pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A form field failed validation. `field` keys the error back to the
	/// offending input.
	#[error("{message}")]
	InvalidField { field: &'static str, message: &'static str },
	#[error("Invalid email or password")]
	InvalidCredentials,
	#[error("A user already exists with this email")]
	EmailTaken,
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Password hashing failed: {message}")]
	PasswordHash { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<jot_domain::FieldError> for Error {
	fn from(err: jot_domain::FieldError) -> Self {
		Self::InvalidField { field: err.field, message: err.message }
	}
}

impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<jot_storage::Error> for Error {
	fn from(err: jot_storage::Error) -> Self {
		match err {
			jot_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			jot_storage::Error::Conflict(_) => Self::EmailTaken,
		}
	}
}
