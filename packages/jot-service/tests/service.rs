use uuid::Uuid;

use jot_config::Postgres;
use jot_service::{
	CreateNoteRequest, DeleteNoteRequest, Error, JotService, LoginRequest, NoteFetchRequest,
	NoteListRequest, RegisterRequest,
};
use jot_storage::db::Db;
use jot_testkit::TestDatabase;

const PASSWORD: &str = "password123";

async fn test_service() -> Option<(TestDatabase, JotService)> {
	let Some(base_dsn) = jot_testkit::env_dsn() else {
		eprintln!("Skipping service tests; set JOT_PG_DSN to run this test.");

		return None;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	Some((test_db, JotService::new(db)))
}

async fn register(service: &JotService, email: &str) -> Uuid {
	service
		.register(RegisterRequest {
			email: Some(email.to_string()),
			password: Some(PASSWORD.to_string()),
		})
		.await
		.expect("Failed to register user.")
		.user_id
}

async fn create(service: &JotService, user_id: Uuid, title: &str, body: &str) -> Uuid {
	service
		.create_note(CreateNoteRequest {
			user_id,
			title: Some(title.to_string()),
			body: Some(body.to_string()),
		})
		.await
		.expect("Failed to create note.")
		.note_id
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set JOT_PG_DSN to run."]
async fn register_and_login_round_trip() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user_id = register(&service, "user@example.com").await;
	let verified = service
		.login(LoginRequest {
			email: Some("user@example.com".to_string()),
			password: Some(PASSWORD.to_string()),
		})
		.await
		.expect("Failed to login.");

	assert_eq!(verified.user_id, user_id);
	assert_eq!(verified.email, "user@example.com");

	let err = service
		.login(LoginRequest {
			email: Some("user@example.com".to_string()),
			password: Some("wrong password".to_string()),
		})
		.await
		.unwrap_err();

	assert!(matches!(err, Error::InvalidCredentials));

	// Unknown emails fail the same way as wrong passwords.
	let err = service
		.login(LoginRequest {
			email: Some("nobody@example.com".to_string()),
			password: Some(PASSWORD.to_string()),
		})
		.await
		.unwrap_err();

	assert!(matches!(err, Error::InvalidCredentials));

	let err = service
		.register(RegisterRequest {
			email: Some("user@example.com".to_string()),
			password: Some(PASSWORD.to_string()),
		})
		.await
		.unwrap_err();

	assert!(matches!(err, Error::EmailTaken));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set JOT_PG_DSN to run."]
async fn created_notes_list_in_insertion_order() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user_id = register(&service, "user@example.com").await;

	create(&service, user_id, "Groceries", "Milk, eggs").await;
	create(&service, user_id, "Ideas", "A note app").await;
	create(&service, user_id, "Travel", "Pack light").await;

	let list = service.list_notes(NoteListRequest { user_id }).await.expect("Failed to list.");

	assert_eq!(
		list.items.iter().map(|item| item.title.as_str()).collect::<Vec<_>>(),
		["Groceries", "Ideas", "Travel"],
	);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set JOT_PG_DSN to run."]
async fn invalid_drafts_write_nothing() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user_id = register(&service, "user@example.com").await;
	let err = service
		.create_note(CreateNoteRequest {
			user_id,
			title: Some(String::new()),
			body: Some("x".to_string()),
		})
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		Error::InvalidField { field: "title", message: "Title is required" },
	));

	let err = service
		.create_note(CreateNoteRequest {
			user_id,
			title: Some("Groceries".to_string()),
			body: None,
		})
		.await
		.unwrap_err();

	assert!(matches!(err, Error::InvalidField { field: "body", message: "Body is required" }));

	let list = service.list_notes(NoteListRequest { user_id }).await.expect("Failed to list.");

	assert!(list.items.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set JOT_PG_DSN to run."]
async fn notes_are_scoped_to_their_owner() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let alice = register(&service, "alice@example.com").await;
	let bob = register(&service, "bob@example.com").await;
	let note_id = create(&service, alice, "Private", "Alice only").await;

	let fetched = service
		.get_note(NoteFetchRequest { note_id, user_id: alice })
		.await
		.expect("Failed to fetch own note.");

	assert_eq!(fetched.title, "Private");
	assert_eq!(fetched.body, "Alice only");

	let err = service.get_note(NoteFetchRequest { note_id, user_id: bob }).await.unwrap_err();

	assert!(matches!(err, Error::NotFound { .. }));

	// Bob deleting Alice's note is a no-op, not an error.
	let response = service
		.delete_note(DeleteNoteRequest { note_id, user_id: bob })
		.await
		.expect("Failed to delete.");

	assert!(!response.deleted);

	let list =
		service.list_notes(NoteListRequest { user_id: alice }).await.expect("Failed to list.");

	assert_eq!(list.items.len(), 1);

	let response = service
		.delete_note(DeleteNoteRequest { note_id, user_id: alice })
		.await
		.expect("Failed to delete.");

	assert!(response.deleted);

	let list =
		service.list_notes(NoteListRequest { user_id: alice }).await.expect("Failed to list.");

	assert!(list.items.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
