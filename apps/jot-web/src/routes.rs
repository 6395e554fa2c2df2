use axum::{
	Form, Json, Router,
	extract::{Path, Query, State},
	http::{HeaderMap, StatusCode, Uri, header},
	response::{Html, IntoResponse, Redirect, Response},
	routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tower_sessions::{Session, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;
use uuid::Uuid;

use jot_service::{
	CreateNoteRequest, DeleteNoteRequest, LoginRequest, NoteFetchRequest, NoteListRequest,
	RegisterRequest,
};

use crate::{session, state::AppState, views};

pub fn router(state: AppState, sessions: SessionManagerLayer<PostgresStore>) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/", get(index))
		.route("/login", get(login_page).post(login))
		.route("/join", get(join_page).post(join))
		.route("/logout", post(logout))
		.route("/notes", get(notes_shell))
		.route("/notes/new", get(new_note_page).post(create_note))
		.route("/notes/theme", post(toggle_theme))
		.route("/notes/{note_id}", get(note_detail))
		.route("/notes/{note_id}/delete", post(delete_note))
		.layer(sessions)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn index() -> Redirect {
	Redirect::to("/notes")
}

#[derive(Debug, Deserialize)]
struct RedirectQuery {
	#[serde(rename = "redirectTo")]
	redirect_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthForm {
	email: Option<String>,
	password: Option<String>,
	#[serde(rename = "redirectTo")]
	redirect_to: Option<String>,
}

async fn login_page(
	session: Session,
	Query(query): Query<RedirectQuery>,
) -> Result<Response, ApiError> {
	if session::current_user_id(&session).await?.is_some() {
		return Ok(Redirect::to("/notes").into_response());
	}

	Ok(Html(views::login_page(query.redirect_to.as_deref())).into_response())
}

async fn login(
	State(state): State<AppState>,
	session: Session,
	Form(form): Form<AuthForm>,
) -> Result<Redirect, ApiError> {
	let verified = state
		.service
		.login(LoginRequest { email: form.email, password: form.password })
		.await?;

	session::establish(&session, verified.user_id).await?;

	Ok(Redirect::to(session::safe_redirect(form.redirect_to.as_deref())))
}

async fn join_page(
	session: Session,
	Query(query): Query<RedirectQuery>,
) -> Result<Response, ApiError> {
	if session::current_user_id(&session).await?.is_some() {
		return Ok(Redirect::to("/notes").into_response());
	}

	Ok(Html(views::join_page(query.redirect_to.as_deref())).into_response())
}

async fn join(
	State(state): State<AppState>,
	session: Session,
	Form(form): Form<AuthForm>,
) -> Result<Redirect, ApiError> {
	let registered = state
		.service
		.register(RegisterRequest { email: form.email, password: form.password })
		.await?;

	session::establish(&session, registered.user_id).await?;

	Ok(Redirect::to(session::safe_redirect(form.redirect_to.as_deref())))
}

async fn logout(session: Session) -> Result<Redirect, ApiError> {
	session::clear(&session).await?;

	Ok(Redirect::to("/login"))
}

async fn notes_shell(
	State(state): State<AppState>,
	session: Session,
) -> Result<Html<String>, ApiError> {
	let user_id = session::require_user_id(&session, "/notes").await?;
	let user = state.service.get_user(user_id).await?;
	let list = state.service.list_notes(NoteListRequest { user_id }).await?;
	let mode = session::color_mode(&session).await?;

	Ok(Html(views::shell(&user.email, mode, &list.items, None, views::NO_NOTE_SELECTED)))
}

async fn new_note_page(
	State(state): State<AppState>,
	session: Session,
) -> Result<Html<String>, ApiError> {
	let user_id = session::require_user_id(&session, "/notes/new").await?;
	let user = state.service.get_user(user_id).await?;
	let list = state.service.list_notes(NoteListRequest { user_id }).await?;
	let mode = session::color_mode(&session).await?;

	Ok(Html(views::shell(&user.email, mode, &list.items, None, &views::new_note_form())))
}

async fn note_detail(
	State(state): State<AppState>,
	session: Session,
	Path(note_id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
	let user_id = session::require_user_id(&session, &format!("/notes/{note_id}")).await?;
	let note = state.service.get_note(NoteFetchRequest { note_id, user_id }).await?;
	let user = state.service.get_user(user_id).await?;
	let list = state.service.list_notes(NoteListRequest { user_id }).await?;
	let mode = session::color_mode(&session).await?;

	Ok(Html(views::shell(
		&user.email,
		mode,
		&list.items,
		Some(note_id),
		&views::note_detail(&note),
	)))
}

#[derive(Debug, Deserialize)]
struct NewNoteForm {
	title: Option<String>,
	body: Option<String>,
}

async fn create_note(
	State(state): State<AppState>,
	session: Session,
	Form(form): Form<NewNoteForm>,
) -> Result<Redirect, ApiError> {
	let user_id = session::require_user_id(&session, "/notes/new").await?;
	let created = state
		.service
		.create_note(CreateNoteRequest { user_id, title: form.title, body: form.body })
		.await?;

	Ok(Redirect::to(&format!("/notes/{}", created.note_id)))
}

async fn delete_note(
	State(state): State<AppState>,
	session: Session,
	Path(note_id): Path<Uuid>,
) -> Result<Redirect, ApiError> {
	let user_id = session::require_user_id(&session, "/notes").await?;

	state.service.delete_note(DeleteNoteRequest { note_id, user_id }).await?;

	Ok(Redirect::to("/notes"))
}

async fn toggle_theme(session: Session, headers: HeaderMap) -> Result<Redirect, ApiError> {
	session::toggle_color_mode(&session).await?;

	// Send the user back to the page the toggle sits on; the Referer path is
	// trimmed to same-site.
	let back = headers
		.get(header::REFERER)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.parse::<Uri>().ok())
		.map(|uri| uri.path().to_string());

	Ok(Redirect::to(session::safe_redirect(back.as_deref())))
}

#[derive(Debug)]
pub enum ApiError {
	/// A form field failed validation; rendered as a field-keyed error
	/// object so the page script can attach it to the input.
	Validation { field: &'static str, message: String },
	NotFound,
	LoginRedirect { target: String },
	Internal { message: String },
}

impl ApiError {
	pub fn login_redirect(original: &str) -> Self {
		Self::LoginRedirect {
			target: format!("/login?redirectTo={}", urlencoding::encode(original)),
		}
	}
}

impl From<jot_service::Error> for ApiError {
	fn from(err: jot_service::Error) -> Self {
		match err {
			jot_service::Error::InvalidField { field, message } =>
				Self::Validation { field, message: message.to_string() },
			jot_service::Error::InvalidCredentials =>
				Self::Validation { field: "email", message: err.to_string() },
			jot_service::Error::EmailTaken =>
				Self::Validation { field: "email", message: err.to_string() },
			jot_service::Error::NotFound { .. } => Self::NotFound,
			jot_service::Error::PasswordHash { message }
			| jot_service::Error::Storage { message } => Self::Internal { message },
		}
	}
}

impl From<tower_sessions::session::Error> for ApiError {
	fn from(err: tower_sessions::session::Error) -> Self {
		Self::Internal { message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		match self {
			Self::Validation { field, message } => {
				let mut fields = serde_json::Map::new();

				fields.insert(field.to_string(), serde_json::Value::String(message));

				(StatusCode::BAD_REQUEST, Json(serde_json::json!({ "errors": fields })))
					.into_response()
			},
			Self::NotFound => (
				StatusCode::NOT_FOUND,
				Html(views::error_page("Not found", "This page does not exist.")),
			)
				.into_response(),
			Self::LoginRedirect { target } => Redirect::to(&target).into_response(),
			Self::Internal { message } => {
				tracing::error!(%message, "Request failed.");

				(
					StatusCode::INTERNAL_SERVER_ERROR,
					Html(views::error_page("Something went wrong", "Try again in a moment.")),
				)
					.into_response()
			},
		}
	}
}
