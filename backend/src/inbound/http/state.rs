//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixturePeopleIngestionCommand, FixturePeopleQuery, PeopleIngestionCommand, PeopleQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ingestion: Arc<dyn PeopleIngestionCommand>,
    pub people: Arc<dyn PeopleQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use nearby_users::domain::ports::{FixturePeopleIngestionCommand, FixturePeopleQuery};
    /// use nearby_users::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixturePeopleIngestionCommand),
    ///     Arc::new(FixturePeopleQuery),
    /// );
    /// let _ = state.people.clone();
    /// ```
    pub fn new(ingestion: Arc<dyn PeopleIngestionCommand>, people: Arc<dyn PeopleQuery>) -> Self {
        Self { ingestion, people }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixturePeopleIngestionCommand),
            Arc::new(FixturePeopleQuery),
        )
    }
}
