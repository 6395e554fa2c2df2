use std::sync::Arc;

use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use jot_service::JotService;
use jot_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<JotService>,
}
impl AppState {
	/// Connects storage, bootstraps the application schema and the session
	/// table, and returns the shared state together with the session layer
	/// for the router.
	pub async fn new(
		config: &jot_config::Config,
	) -> color_eyre::Result<(Self, SessionManagerLayer<PostgresStore>)> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let store = PostgresStore::new(db.pool.clone());

		store.migrate().await?;

		let sessions = SessionManagerLayer::new(store)
			.with_name(config.session.cookie_name.clone())
			.with_secure(config.session.secure)
			.with_expiry(Expiry::OnInactivity(Duration::minutes(config.session.ttl_minutes)));
		let service = JotService::new(db);

		Ok((Self { service: Arc::new(service) }, sessions))
	}
}
