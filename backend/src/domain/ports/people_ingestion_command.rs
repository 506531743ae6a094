//! Driving port for ingesting a batch of people.

use async_trait::async_trait;

use crate::domain::{BatchId, Error};

/// Result of one successful ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionOutcome {
    /// Batch number shared by every stored record of the call.
    pub batch_id: BatchId,
    /// Number of records stored.
    pub ingested: usize,
}

/// Domain use-case port for ingestion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleIngestionCommand: Send + Sync {
    /// Fetch `count` people from the source and store them as one batch.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` when `count` is zero.
    /// - `UpstreamUnavailable` when the source fails or sends unusable data.
    /// - `ConstraintViolation` when an email is already stored.
    async fn ingest(&self, count: u32) -> Result<IngestionOutcome, Error>;
}

/// Fixture command used when no source is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePeopleIngestionCommand;

#[async_trait]
impl PeopleIngestionCommand for FixturePeopleIngestionCommand {
    async fn ingest(&self, count: u32) -> Result<IngestionOutcome, Error> {
        if count == 0 {
            return Err(Error::invalid_request("num_users must be a positive integer"));
        }
        Err(Error::upstream_unavailable(
            "Failed to fetch users from RandomUser API",
        ))
    }
}
