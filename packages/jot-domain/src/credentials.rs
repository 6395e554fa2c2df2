use crate::FieldError;

pub const EMAIL_INVALID: FieldError = FieldError { field: "email", message: "Email is invalid" };
pub const PASSWORD_REQUIRED: FieldError =
	FieldError { field: "password", message: "Password is required" };
pub const PASSWORD_TOO_SHORT: FieldError =
	FieldError { field: "password", message: "Password is too short" };

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

/// Login accepts any non-empty password; whether it matches is decided
/// against the stored hash. Email is checked first.
pub fn validate_login(
	email: Option<String>,
	password: Option<String>,
) -> Result<Credentials, FieldError> {
	let email = validate_email(email)?;
	let password = match password {
		Some(password) if !password.is_empty() => password,
		_ => return Err(PASSWORD_REQUIRED),
	};

	Ok(Credentials { email, password })
}

/// Signup additionally enforces the minimum password length.
pub fn validate_signup(
	email: Option<String>,
	password: Option<String>,
) -> Result<Credentials, FieldError> {
	let credentials = validate_login(email, password)?;

	if credentials.password.chars().count() < MIN_PASSWORD_LEN {
		return Err(PASSWORD_TOO_SHORT);
	}

	Ok(credentials)
}

fn validate_email(email: Option<String>) -> Result<String, FieldError> {
	match email {
		Some(email) if email.len() > 3 && email.contains('@') => Ok(email),
		_ => Err(EMAIL_INVALID),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn email_is_checked_before_password() {
		assert_eq!(validate_login(None, None).unwrap_err(), EMAIL_INVALID);
		assert_eq!(
			validate_login(Some("no-at-sign".to_string()), Some("password123".to_string()))
				.unwrap_err(),
			EMAIL_INVALID,
		);
		assert_eq!(validate_login(Some("a@b".to_string()), None).unwrap_err(), EMAIL_INVALID);
	}

	#[test]
	fn login_requires_a_password_but_not_a_long_one() {
		assert_eq!(
			validate_login(Some("user@example.com".to_string()), Some(String::new()))
				.unwrap_err(),
			PASSWORD_REQUIRED,
		);
		assert!(validate_login(Some("user@example.com".to_string()), Some("x".to_string())).is_ok());
	}

	#[test]
	fn signup_enforces_minimum_length() {
		assert_eq!(
			validate_signup(Some("user@example.com".to_string()), Some("short".to_string()))
				.unwrap_err(),
			PASSWORD_TOO_SHORT,
		);

		let credentials =
			validate_signup(Some("user@example.com".to_string()), Some("password123".to_string()))
				.expect("Credentials should validate.");

		assert_eq!(credentials.email, "user@example.com");
	}
}
