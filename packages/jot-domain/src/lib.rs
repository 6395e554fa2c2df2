pub mod credentials;
pub mod draft;
pub mod theme;

pub use credentials::{Credentials, validate_login, validate_signup};
pub use draft::{NoteDraft, ValidNote, validate_note};
pub use theme::{ColorMode, ListItemStyle, list_item_style};

/// A rejected form field. `field` matches the form input name so the error
/// can be keyed back to it in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
	pub field: &'static str,
	pub message: &'static str,
}
