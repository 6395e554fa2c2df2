use tower_sessions::Session;
use uuid::Uuid;

use jot_domain::ColorMode;

use crate::routes::ApiError;

pub const USER_ID_KEY: &str = "user_id";
pub const COLOR_MODE_KEY: &str = "color_mode";

/// The session gate. Resolves the authenticated user or fails the request
/// with a redirect to the login page carrying the original destination.
pub async fn require_user_id(session: &Session, original: &str) -> Result<Uuid, ApiError> {
	match session.get::<Uuid>(USER_ID_KEY).await? {
		Some(user_id) => Ok(user_id),
		None => Err(ApiError::login_redirect(original)),
	}
}

pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
	Ok(session.get::<Uuid>(USER_ID_KEY).await?)
}

pub async fn establish(session: &Session, user_id: Uuid) -> Result<(), ApiError> {
	// A fresh session id on login defeats fixation.
	session.cycle_id().await?;
	session.insert(USER_ID_KEY, user_id).await?;

	Ok(())
}

pub async fn clear(session: &Session) -> Result<(), ApiError> {
	session.flush().await?;

	Ok(())
}

pub async fn color_mode(session: &Session) -> Result<ColorMode, ApiError> {
	Ok(session.get::<ColorMode>(COLOR_MODE_KEY).await?.unwrap_or_default())
}

pub async fn toggle_color_mode(session: &Session) -> Result<ColorMode, ApiError> {
	let mode = color_mode(session).await?.toggled();

	session.insert(COLOR_MODE_KEY, mode).await?;

	Ok(mode)
}

/// Post-login destinations must be same-site absolute paths; anything else
/// falls back to the notes shell.
pub fn safe_redirect(target: Option<&str>) -> &str {
	match target {
		Some(target) if target.starts_with('/') && !target.starts_with("//") => target,
		_ => "/notes",
	}
}
