//! Server-rendered pages. No template engine; pages are small enough that
//! plain rendering functions stay readable and unit-testable.

use uuid::Uuid;

use jot_domain::{ColorMode, theme};
use jot_service::{NoteFetchResponse, NoteListItem};

pub const NO_NOTE_SELECTED: &str = "<p>No note selected. Select a note on the left, or <a \
                                    href=\"/notes/new\">create a new note</a>.</p>";

const STYLESHEET: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { font-family: system-ui, sans-serif; min-height: 100vh; display: flex; flex-direction: column; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.5rem; }
header h1 { font-size: 1.875rem; }
header .account { display: flex; align-items: center; gap: 1rem; }
header a { color: inherit; text-decoration: none; }
main { display: flex; flex: 1; }
.sidebar { width: 20rem; border-right: 1px solid #e2e8f0; display: flex; flex-direction: column; }
.sidebar .new-note { display: block; padding: 1rem; font-size: 1.25rem; text-decoration: none; color: inherit; border-bottom: 1px solid #e2e8f0; }
.sidebar .empty { padding: 1rem; }
.note-list { list-style: none; padding: 0; }
.note-list a { display: block; padding: 1rem; font-size: 1.25rem; text-decoration: none; color: inherit; border-bottom: 1px solid #e2e8f0; }
.content { flex: 1; padding: 1.5rem; }
.note-body { padding: 1.5rem 0; white-space: pre-wrap; }
form.stacked { display: flex; flex-direction: column; gap: 0.5rem; max-width: 40rem; }
form.stacked input, form.stacked textarea { font: inherit; padding: 0.25rem 0.5rem; }
form.stacked .error { color: #c53030; min-height: 1.25rem; }
button { font: inherit; padding: 0.25rem 0.75rem; cursor: pointer; }
button.primary { margin-left: auto; background: #3182ce; color: white; border: none; border-radius: 0.25rem; padding: 0.5rem 1rem; }
button.danger { background: #e53e3e; color: white; border: none; border-radius: 0.25rem; }
"#;

/// Enhances forms marked `data-enhanced`: submissions go over `fetch`, a
/// redirect is followed, and a 400 re-renders the field-keyed errors and
/// focuses the first invalid field. Runs again on every submission, so each
/// new error payload moves focus afresh.
const FORM_SCRIPT: &str = r#"<script>
document.querySelectorAll("form[data-enhanced]").forEach((form) => {
  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    const response = await fetch(form.action, {
      method: "post",
      body: new URLSearchParams(new FormData(form)),
    });
    if (response.redirected) {
      window.location.assign(response.url);
      return;
    }
    const payload = await response.json().catch(() => ({}));
    const errors = payload.errors || {};
    form.querySelectorAll("[data-error-for]").forEach((slot) => {
      slot.textContent = errors[slot.dataset.errorFor] || "";
    });
    for (const element of form.elements) {
      if (!element.name) continue;
      if (errors[element.name]) {
        element.setAttribute("aria-invalid", "true");
      } else {
        element.removeAttribute("aria-invalid");
      }
    }
    const first = Object.keys(errors)[0];
    if (first && form.elements[first]) form.elements[first].focus();
  });
});
</script>"#;

pub fn shell(
	email: &str,
	mode: ColorMode,
	items: &[NoteListItem],
	active: Option<Uuid>,
	content: &str,
) -> String {
	let header_bg = token_hex(mode_value(mode, "gray.100", "gray.900"));
	let surface_bg = token_hex(mode_value(mode, "white", "gray.800"));
	let surface_fg = token_hex(mode_value(mode, "gray.800", "gray.50"));
	let toggle_icon = match mode {
		ColorMode::Light => "🌙",
		ColorMode::Dark => "☀️",
	};
	let body = format!(
		r#"<header style="background-color:{header_bg};">
<h1><a href="/notes">Notes</a></h1>
<div class="account">
<span>{email}</span>
<form method="post" action="/notes/theme"><button type="submit" title="Toggle color mode">{toggle_icon}</button></form>
<form method="post" action="/logout"><button type="submit" class="danger">Logout</button></form>
</div>
</header>
<main>
<div class="sidebar">
<a class="new-note" href="/notes/new" style="background-color:{header_bg};">+ New Note</a>
{sidebar}
</div>
<div class="content">
{content}
</div>
</main>"#,
		email = escape_html(email),
		sidebar = sidebar(mode, items, active),
	);

	page("Notes", surface_bg, surface_fg, &body)
}

fn sidebar(mode: ColorMode, items: &[NoteListItem], active: Option<Uuid>) -> String {
	if items.is_empty() {
		return r#"<p class="empty">No notes yet</p>"#.to_string();
	}

	let mut list = String::from("<ol class=\"note-list\">\n");

	for item in items {
		let style = theme::list_item_style(mode, active == Some(item.note_id));
		let mut css = String::new();

		if let Some(background) = style.background {
			css.push_str("background-color:");
			css.push_str(token_hex(background));
			css.push(';');
		}
		if let Some(text) = style.text {
			css.push_str("color:");
			css.push_str(token_hex(text));
			css.push(';');
		}

		list.push_str(&format!(
			"<li><a href=\"/notes/{id}\" style=\"{css}\">📝 {title}</a></li>\n",
			id = item.note_id,
			title = escape_html(&item.title),
		));
	}

	list.push_str("</ol>");

	list
}

pub fn note_detail(note: &NoteFetchResponse) -> String {
	format!(
		r#"<h3>{title}</h3>
<p class="note-body">{body}</p>
<hr />
<form method="post" action="/notes/{id}/delete">
<button type="submit" class="danger">Delete</button>
</form>"#,
		title = escape_html(&note.title),
		body = escape_html(&note.body),
		id = note.note_id,
	)
}

pub fn new_note_form() -> String {
	r#"<form class="stacked" method="post" action="/notes/new" data-enhanced>
<label for="title">Title: </label>
<input id="title" name="title" type="text" />
<p class="error" data-error-for="title"></p>
<label for="body">Body</label>
<textarea id="body" name="body" rows="8"></textarea>
<p class="error" data-error-for="body"></p>
<button type="submit" class="primary">Save</button>
</form>"#
		.to_string()
}

pub fn login_page(redirect_to: Option<&str>) -> String {
	page("Log in", token_hex("white"), token_hex("gray.800"), &auth_form("/login", "Log in", "Don't have an account? <a href=\"/join\">Sign up</a>", redirect_to))
}

pub fn join_page(redirect_to: Option<&str>) -> String {
	page("Sign up", token_hex("white"), token_hex("gray.800"), &auth_form("/join", "Create account", "Already have an account? <a href=\"/login\">Log in</a>", redirect_to))
}

fn auth_form(action: &str, submit: &str, footer: &str, redirect_to: Option<&str>) -> String {
	let hidden = match redirect_to {
		Some(target) => format!(
			"<input type=\"hidden\" name=\"redirectTo\" value=\"{}\" />",
			escape_html(target),
		),
		None => String::new(),
	};

	format!(
		r#"<div class="content">
<form class="stacked" method="post" action="{action}" data-enhanced>
<label for="email">Email address</label>
<input id="email" name="email" type="email" autocomplete="email" />
<p class="error" data-error-for="email"></p>
<label for="password">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password" />
<p class="error" data-error-for="password"></p>
{hidden}
<button type="submit" class="primary">{submit}</button>
<p>{footer}</p>
</form>
</div>"#,
	)
}

pub fn error_page(title: &str, message: &str) -> String {
	let body = format!(
		"<div class=\"content\"><h1>{}</h1><p>{}</p><p><a href=\"/notes\">Back to \
		 notes</a></p></div>",
		escape_html(title),
		escape_html(message),
	);

	page(title, token_hex("white"), token_hex("gray.800"), &body)
}

fn page(title: &str, background: &str, foreground: &str, body: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title} | Jot</title>
<style>{STYLESHEET}</style>
</head>
<body style="background-color:{background};color:{foreground};">
{body}
{FORM_SCRIPT}
</body>
</html>"#,
		title = escape_html(title),
	)
}

fn mode_value<'a>(mode: ColorMode, light: &'a str, dark: &'a str) -> &'a str {
	match mode {
		ColorMode::Light => light,
		ColorMode::Dark => dark,
	}
}

/// Resolves a palette token from the style lookup to its hex value.
fn token_hex(token: &str) -> &'static str {
	match token {
		"blue.100" => "#bee3f8",
		"purple.900" => "#322659",
		"gray.50" => "#f7fafc",
		"gray.100" => "#edf2f7",
		"gray.200" => "#e2e8f0",
		"gray.800" => "#1a202c",
		"gray.900" => "#171923",
		"black" => "#000000",
		"white" => "#ffffff",
		_ => "inherit",
	}
}

fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());

	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(titles: &[&str]) -> Vec<NoteListItem> {
		titles
			.iter()
			.map(|title| NoteListItem { note_id: Uuid::new_v4(), title: title.to_string() })
			.collect()
	}

	#[test]
	fn empty_sidebar_shows_the_empty_state() {
		let html = shell("user@example.com", ColorMode::Light, &[], None, NO_NOTE_SELECTED);

		assert!(html.contains("No notes yet"));
		assert!(!html.contains("📝"));
	}

	#[test]
	fn sidebar_renders_one_entry_per_note() {
		let items = items(&["First", "Second", "Third"]);
		let html = shell("user@example.com", ColorMode::Light, &items, None, NO_NOTE_SELECTED);

		assert_eq!(html.matches("📝 ").count(), 3);
		assert!(html.contains("📝 First"));
		assert!(html.contains(&format!("/notes/{}", items[2].note_id)));
	}

	#[test]
	fn active_entry_is_highlighted_in_light_mode() {
		let items = items(&["Only"]);
		let active = Some(items[0].note_id);
		let html = shell("user@example.com", ColorMode::Light, &items, active, "");

		// blue.100
		assert!(html.contains("background-color:#bee3f8;"));
	}

	#[test]
	fn dark_inactive_entries_get_black_text() {
		let items = items(&["Only"]);
		let html = shell("user@example.com", ColorMode::Dark, &items, None, "");

		// gray.200 background, black text
		assert!(html.contains("background-color:#e2e8f0;"));
		assert!(html.contains("color:#000000;"));
	}

	#[test]
	fn titles_are_escaped() {
		let items = items(&["<script>alert(1)</script>"]);
		let html = shell("user@example.com", ColorMode::Light, &items, None, "");

		assert!(html.contains("&lt;script&gt;"));
		assert!(!html.contains("<script>alert"));
	}

	#[test]
	fn auth_pages_round_trip_the_redirect_target() {
		let html = login_page(Some("/notes/abc"));

		assert!(html.contains(r#"name="redirectTo" value="/notes/abc""#));
		assert!(login_page(None).contains("Sign up"));
		assert!(join_page(None).contains("Log in"));
	}
}
