use argon2::{
	Argon2,
	password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use time::OffsetDateTime;
use uuid::Uuid;

use jot_storage::{models::User, queries};

use crate::{Error, JotService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
	pub email: Option<String>,
	pub password: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
	pub user_id: Uuid,
	pub email: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
	pub email: Option<String>,
	pub password: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
	pub user_id: Uuid,
	pub email: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserResponse {
	pub user_id: Uuid,
	pub email: String,
}

impl JotService {
	pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse> {
		let credentials = jot_domain::validate_signup(req.email, req.password)?;

		if queries::find_user_by_email(&self.db, &credentials.email).await?.is_some() {
			return Err(Error::EmailTaken);
		}

		let now = OffsetDateTime::now_utc();
		let user = User {
			user_id: Uuid::new_v4(),
			email: credentials.email,
			password_hash: hash_password(&credentials.password)?,
			created_at: now,
			updated_at: now,
		};

		queries::insert_user(&self.db, &user).await?;

		tracing::info!(user_id = %user.user_id, "Registered user.");

		Ok(RegisterResponse { user_id: user.user_id, email: user.email })
	}

	/// Verifies credentials against the stored hash. A missing user and a
	/// wrong password produce the same error so the response does not leak
	/// which emails exist.
	pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
		let credentials = jot_domain::validate_login(req.email, req.password)?;
		let Some(user) = queries::find_user_by_email(&self.db, &credentials.email).await? else {
			return Err(Error::InvalidCredentials);
		};

		if !verify_password(&credentials.password, &user.password_hash)? {
			return Err(Error::InvalidCredentials);
		}

		tracing::debug!(user_id = %user.user_id, "Verified login.");

		Ok(LoginResponse { user_id: user.user_id, email: user.email })
	}

	pub async fn get_user(&self, user_id: Uuid) -> Result<UserResponse> {
		let Some(user) = queries::find_user_by_id(&self.db, user_id).await? else {
			return Err(Error::NotFound { message: "Unknown user_id.".to_string() });
		};

		Ok(UserResponse { user_id: user.user_id, email: user.email })
	}
}

fn hash_password(password: &str) -> Result<String> {
	let salt = SaltString::generate(&mut OsRng);
	let hash = Argon2::default()
		.hash_password(password.as_bytes(), &salt)
		.map_err(|err| Error::PasswordHash { message: err.to_string() })?;

	Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool> {
	let parsed = PasswordHash::new(hash)
		.map_err(|err| Error::PasswordHash { message: err.to_string() })?;

	Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn password_hashing_round_trips() {
		let hash = hash_password("correct horse battery staple").expect("Hashing should work.");

		assert!(hash.starts_with("$argon2"));
		assert!(verify_password("correct horse battery staple", &hash).unwrap());
		assert!(!verify_password("wrong password", &hash).unwrap());
	}
}
