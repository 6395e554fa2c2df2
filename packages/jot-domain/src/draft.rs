use crate::FieldError;

pub const TITLE_REQUIRED: FieldError =
	FieldError { field: "title", message: "Title is required" };
pub const BODY_REQUIRED: FieldError = FieldError { field: "body", message: "Body is required" };

/// Raw form input for a new note. Fields are optional because the form may
/// omit them entirely.
#[derive(Debug, Default)]
pub struct NoteDraft {
	pub title: Option<String>,
	pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNote {
	pub title: String,
	pub body: String,
}

/// Checks `title` before `body` and stops at the first failing field, so a
/// submission surfaces at most one error. Values are taken as-is; an
/// all-whitespace title is a valid title.
pub fn validate_note(draft: NoteDraft) -> Result<ValidNote, FieldError> {
	let title = match draft.title {
		Some(title) if !title.is_empty() => title,
		_ => return Err(TITLE_REQUIRED),
	};
	let body = match draft.body {
		Some(body) if !body.is_empty() => body,
		_ => return Err(BODY_REQUIRED),
	};

	Ok(ValidNote { title, body })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_is_checked_first() {
		let err = validate_note(NoteDraft { title: None, body: None }).unwrap_err();

		assert_eq!(err, TITLE_REQUIRED);

		// An empty title wins over an empty body.
		let err = validate_note(NoteDraft {
			title: Some(String::new()),
			body: Some(String::new()),
		})
		.unwrap_err();

		assert_eq!(err, TITLE_REQUIRED);
		assert_eq!(err.message, "Title is required");
	}

	#[test]
	fn body_is_checked_after_title_passes() {
		let err = validate_note(NoteDraft { title: Some("Groceries".to_string()), body: None })
			.unwrap_err();

		assert_eq!(err, BODY_REQUIRED);
		assert_eq!(err.message, "Body is required");
	}

	#[test]
	fn non_empty_fields_pass_unmodified() {
		let note = validate_note(NoteDraft {
			title: Some("Groceries".to_string()),
			body: Some("Milk, eggs".to_string()),
		})
		.expect("Draft should validate.");

		assert_eq!(note.title, "Groceries");
		assert_eq!(note.body, "Milk, eggs");
	}

	#[test]
	fn whitespace_counts_as_content() {
		assert!(
			validate_note(NoteDraft { title: Some(" ".to_string()), body: Some(" ".to_string()) })
				.is_ok()
		);
	}
}
