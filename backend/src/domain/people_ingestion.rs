//! People ingestion orchestration service.
//!
//! One call fetches `count` people from the source, normalises them into
//! store rows tagged with a shared batch id, and inserts them as a single
//! all-or-nothing batch.
//!
//! The batch id is `floor(stored / count) + 1`, with `stored` read before
//! the insert. Numbers from calls with different `count` values are not
//! comparable, and two concurrent calls may both observe the same `stored`
//! value and share a batch id. Both behaviours are part of the contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use super::repository_errors::map_repository_error;
use crate::domain::ports::{
    IngestionOutcome, PeopleIngestionCommand, PersonRepository, PersonSource, PersonSourceError,
    SourcePerson,
};
use crate::domain::{
    BatchId, Coordinate, Error, NewPerson, PersonProfile, PersonValidationError,
};

/// Domain service implementing [`PeopleIngestionCommand`].
pub struct PeopleIngestionService<S: ?Sized, R: ?Sized> {
    source: Arc<S>,
    repository: Arc<R>,
}

impl<S: ?Sized, R: ?Sized> Clone for PeopleIngestionService<S, R> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<S: ?Sized, R: ?Sized> PeopleIngestionService<S, R> {
    /// Create a new ingestion service.
    pub fn new(source: Arc<S>, repository: Arc<R>) -> Self {
        Self { source, repository }
    }
}

#[async_trait]
impl<S, R> PeopleIngestionCommand for PeopleIngestionService<S, R>
where
    S: PersonSource + ?Sized,
    R: PersonRepository + ?Sized,
{
    async fn ingest(&self, count: u32) -> Result<IngestionOutcome, Error> {
        if count == 0 {
            return Err(Error::invalid_request(
                "num_users must be a positive integer",
            ));
        }

        let stored = self
            .repository
            .count()
            .await
            .map_err(map_repository_error)?;
        let batch_id = next_batch_id(stored, count)?;

        let fetched = self
            .source
            .fetch_people(count)
            .await
            .map_err(map_source_error)?;
        if fetched.len() != count as usize {
            warn!(
                requested = count,
                received = fetched.len(),
                "person source returned a short batch"
            );
            return Err(Error::upstream_unavailable(SOURCE_FAILURE_MESSAGE));
        }

        let records = fetched
            .into_iter()
            .map(|person| normalise(person, batch_id))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = self
            .repository
            .insert_batch(&records)
            .await
            .map_err(map_repository_error)?;

        info!(batch_id = batch_id.get(), stored = ids.len(), "stored people batch");
        Ok(IngestionOutcome {
            batch_id,
            ingested: ids.len(),
        })
    }
}

/// Client-facing text for every source failure; the cause is only logged.
pub(crate) const SOURCE_FAILURE_MESSAGE: &str = "Failed to fetch users from RandomUser API";

/// Batch number for a call of size `count` given `stored` existing records.
pub(crate) fn next_batch_id(stored: u64, count: u32) -> Result<BatchId, Error> {
    let rounds = stored
        .checked_div(u64::from(count))
        .ok_or_else(|| Error::invalid_request("num_users must be a positive integer"))?;
    let raw = i64::try_from(rounds)
        .ok()
        .and_then(|rounds| rounds.checked_add(1))
        .ok_or_else(|| Error::internal("batch number exceeds supported range"))?;
    BatchId::new(raw).map_err(|err| Error::internal(err.to_string()))
}

fn normalise(person: SourcePerson, batch_id: BatchId) -> Result<NewPerson, Error> {
    let SourcePerson {
        email,
        first_name,
        last_name,
        gender,
        latitude,
        longitude,
        registered_at,
    } = person;

    let profile = PersonProfile::new(email.as_str(), first_name, last_name, gender)
        .map_err(|err| invalid_source_person(&email, &err))?;
    let coordinate =
        Coordinate::new(latitude, longitude).map_err(|err| invalid_source_person(&email, &err))?;

    Ok(NewPerson {
        profile,
        coordinate,
        batch_id,
        ingested_at: registered_at.with_timezone(&Utc),
    })
}

fn invalid_source_person(email: &str, error: &PersonValidationError) -> Error {
    warn!(%email, %error, "person source sent an unusable record");
    Error::upstream_unavailable(SOURCE_FAILURE_MESSAGE)
}

fn map_source_error(error: PersonSourceError) -> Error {
    warn!(%error, "person source request failed");
    Error::upstream_unavailable(SOURCE_FAILURE_MESSAGE)
}

#[cfg(test)]
#[path = "people_ingestion_tests.rs"]
mod tests;
