//! Port for the external random-person data source.
//!
//! Adapters own transport and payload decoding; they hand back people in a
//! normalised shape so the ingestion service only deals with domain types.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use super::define_port_error;

/// One person as returned by the source after normalisation.
///
/// Coordinates are plain degrees and are validated by the ingestion service,
/// not by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePerson {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Registration timestamp with an explicit UTC offset.
    pub registered_at: DateTime<FixedOffset>,
}

define_port_error! {
    /// Errors raised while fetching people from the source.
    pub enum PersonSourceError {
        /// The request could not be sent or the body could not be read.
        Transport { message: String } => "person source transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } => "person source timed out: {message}",
        /// The source answered with a non-success status.
        Status { status: u16 } => "person source returned status {status}",
        /// The payload did not match the expected shape.
        Decode { message: String } => "person source payload invalid: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonSource: Send + Sync {
    /// Request `count` people from the source.
    async fn fetch_people(&self, count: u32) -> Result<Vec<SourcePerson>, PersonSourceError>;
}

/// Fixture source that always reports itself unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonSource;

#[async_trait]
impl PersonSource for FixturePersonSource {
    async fn fetch_people(&self, _count: u32) -> Result<Vec<SourcePerson>, PersonSourceError> {
        Err(PersonSourceError::status(503_u16))
    }
}
