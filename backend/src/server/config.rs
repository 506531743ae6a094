//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use nearby_users::outbound::persistence::DbPool;
use reqwest::Url;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) source_url: Url,
    pub(crate) source_timeout: Duration,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration that uses the in-memory people store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, source_url: Url, source_timeout: Duration) -> Self {
        Self {
            bind_addr,
            source_url,
            source_timeout,
            db_pool: None,
        }
    }

    /// Attach a database pool so people are stored in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
