use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub session: SessionConfig,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
	/// Name of the session cookie sent to browsers.
	pub cookie_name: String,
	/// Sessions expire after this many minutes of inactivity.
	pub ttl_minutes: i64,
	/// Set the Secure attribute on the session cookie. Turn off for plain
	/// HTTP during local development.
	pub secure: bool,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}
