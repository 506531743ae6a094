//! Builders wiring outbound adapters into the HTTP handler state.

use std::sync::Arc;

use nearby_users::domain::ports::{PersonRepository, PersonSource};
use nearby_users::domain::{PeopleIngestionService, PeopleQueryService};
use nearby_users::inbound::http::state::HttpState;
use nearby_users::outbound::memory::InMemoryPersonRepository;
use nearby_users::outbound::persistence::DieselPersonRepository;
use nearby_users::outbound::randomuser::RandomUserHttpSource;
use tracing::info;

use super::ServerConfig;

/// Pick the people store: PostgreSQL when a pool is configured, otherwise
/// an in-process store that lives as long as the server.
fn build_repository(config: &ServerConfig) -> Arc<dyn PersonRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselPersonRepository::new(pool.clone())),
        None => {
            info!("no database configured; using in-memory people store");
            Arc::new(InMemoryPersonRepository::new())
        }
    }
}

fn build_source(config: &ServerConfig) -> std::io::Result<Arc<dyn PersonSource>> {
    let source = RandomUserHttpSource::new(config.source_url.clone(), config.source_timeout)
        .map_err(|err| std::io::Error::other(format!("failed to build source client: {err}")))?;
    Ok(Arc::new(source))
}

/// Build the handler state shared by every worker.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client for the source cannot be
/// constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let repository = build_repository(config);
    let source = build_source(config)?;
    let ingestion = PeopleIngestionService::new(source, Arc::clone(&repository));
    let people = PeopleQueryService::new(repository);
    Ok(HttpState::new(Arc::new(ingestion), Arc::new(people)))
}
