//! Driving port for read-side people queries.

use async_trait::async_trait;

use crate::domain::{Error, NearbyPerson, Person, PersonId};

/// Domain use-case port for sampling and proximity queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleQuery: Send + Sync {
    /// One record chosen uniformly at random, or `None` for an empty store.
    async fn random_person(&self) -> Result<Option<Person>, Error>;

    /// The `limit` records closest to `reference`, nearest first.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` when `limit` is zero.
    /// - `NotFound` when `reference` is not stored.
    async fn nearest_people(
        &self,
        reference: PersonId,
        limit: usize,
    ) -> Result<Vec<NearbyPerson>, Error>;
}

/// Fixture query over an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePeopleQuery;

#[async_trait]
impl PeopleQuery for FixturePeopleQuery {
    async fn random_person(&self) -> Result<Option<Person>, Error> {
        Ok(None)
    }

    async fn nearest_people(
        &self,
        _reference: PersonId,
        _limit: usize,
    ) -> Result<Vec<NearbyPerson>, Error> {
        Err(Error::not_found("User not found"))
    }
}
