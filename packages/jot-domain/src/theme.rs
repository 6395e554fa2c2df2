use serde::{Deserialize, Serialize};

/// The page-wide color mode. Stored in the session and flipped by the
/// header toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
	#[default]
	Light,
	Dark,
}
impl ColorMode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

/// Color tokens for one sidebar entry. `None` means "inherit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemStyle {
	pub background: Option<&'static str>,
	pub text: Option<&'static str>,
}

/// Style for a sidebar entry, keyed by (color mode, is the entry the note
/// currently being viewed). The active entry must stay visually distinct
/// from its neighbours in both modes.
pub fn list_item_style(mode: ColorMode, active: bool) -> ListItemStyle {
	match (mode, active) {
		(ColorMode::Light, true) => ListItemStyle { background: Some("blue.100"), text: None },
		(ColorMode::Light, false) => ListItemStyle { background: None, text: None },
		(ColorMode::Dark, true) => ListItemStyle { background: Some("purple.900"), text: None },
		(ColorMode::Dark, false) =>
			ListItemStyle { background: Some("gray.200"), text: Some("black") },
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn light_active_entries_are_highlighted() {
		let style = list_item_style(ColorMode::Light, true);

		assert_eq!(style.background, Some("blue.100"));
		assert_eq!(style.text, None);
	}

	#[test]
	fn light_inactive_entries_inherit() {
		assert_eq!(
			list_item_style(ColorMode::Light, false),
			ListItemStyle { background: None, text: None },
		);
	}

	#[test]
	fn dark_entries_stay_readable() {
		assert_eq!(list_item_style(ColorMode::Dark, true).background, Some("purple.900"));

		let inactive = list_item_style(ColorMode::Dark, false);

		assert_eq!(inactive.background, Some("gray.200"));
		assert_eq!(inactive.text, Some("black"));
	}

	#[test]
	fn active_entries_differ_from_inactive_in_both_modes() {
		for mode in [ColorMode::Light, ColorMode::Dark] {
			assert_ne!(list_item_style(mode, true), list_item_style(mode, false));
		}
	}

	#[test]
	fn toggling_round_trips() {
		assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
		assert_eq!(ColorMode::Dark.toggled().toggled(), ColorMode::Dark);
		assert_eq!(ColorMode::default(), ColorMode::Light);
	}
}
