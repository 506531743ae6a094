//! Read-side people service: random sampling and nearest-neighbour lookup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::repository_errors::map_repository_error;
use crate::domain::ports::{PeopleQuery, PersonRepository};
use crate::domain::{Error, NearbyPerson, Person, PersonId, rank_nearest};

/// Domain service implementing [`PeopleQuery`] over a person repository.
pub struct PeopleQueryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for PeopleQueryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> PeopleQueryService<R> {
    /// Create a new query service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PeopleQuery for PeopleQueryService<R>
where
    R: PersonRepository + ?Sized,
{
    async fn random_person(&self) -> Result<Option<Person>, Error> {
        self.repository.random().await.map_err(map_repository_error)
    }

    async fn nearest_people(
        &self,
        reference: PersonId,
        limit: usize,
    ) -> Result<Vec<NearbyPerson>, Error> {
        if limit == 0 {
            return Err(Error::invalid_request(
                "num_users must be a positive integer",
            ));
        }

        let Some(anchor) = self
            .repository
            .find_by_id(reference)
            .await
            .map_err(map_repository_error)?
        else {
            return Err(Error::not_found("User not found"));
        };

        let candidates = self
            .repository
            .all_except(reference)
            .await
            .map_err(map_repository_error)?;
        debug!(
            reference = reference.get(),
            candidates = candidates.len(),
            limit,
            "ranking nearest people"
        );
        Ok(rank_nearest(&anchor, candidates, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockPersonRepository, PersonRepositoryError};
    use crate::domain::{BatchId, Coordinate, ErrorCode, PersonProfile};
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    fn person(id: i64, latitude: f64, longitude: f64) -> Person {
        Person {
            id: PersonId::new(id),
            profile: PersonProfile::new(format!("p{id}@example.test"), "First", "Last", "male")
                .expect("valid profile"),
            coordinate: Coordinate::new(latitude, longitude).expect("valid coordinate"),
            batch_id: BatchId::new(1).expect("valid batch"),
            ingested_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn service(repository: MockPersonRepository) -> PeopleQueryService<MockPersonRepository> {
        PeopleQueryService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn random_person_delegates_to_repository() {
        let mut repository = MockPersonRepository::new();
        repository
            .expect_random()
            .times(1)
            .return_once(|| Ok(Some(person(4, 1.0, 1.0))));

        let sampled = service(repository)
            .random_person()
            .await
            .expect("sampling succeeds")
            .expect("person present");

        assert_eq!(sampled.id, PersonId::new(4));
    }

    #[rstest]
    #[tokio::test]
    async fn random_person_on_empty_store_is_none() {
        let mut repository = MockPersonRepository::new();
        repository.expect_random().return_once(|| Ok(None));

        let sampled = service(repository)
            .random_person()
            .await
            .expect("sampling succeeds");

        assert!(sampled.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn random_person_maps_store_failure() {
        let mut repository = MockPersonRepository::new();
        repository
            .expect_random()
            .return_once(|| Err(PersonRepositoryError::query("boom")));

        let error = service(repository)
            .random_person()
            .await
            .expect_err("store failure propagates");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn nearest_rejects_zero_limit() {
        let mut repository = MockPersonRepository::new();
        repository.expect_find_by_id().never();

        let error = service(repository)
            .nearest_people(PersonId::new(1), 0)
            .await
            .expect_err("zero limit rejected");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn nearest_reports_missing_reference() {
        let mut repository = MockPersonRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == PersonId::new(99))
            .return_once(|_| Ok(None));
        repository.expect_all_except().never();

        let error = service(repository)
            .nearest_people(PersonId::new(99), 3)
            .await
            .expect_err("missing reference rejected");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "User not found");
    }

    #[rstest]
    #[tokio::test]
    async fn nearest_ranks_candidates_by_distance() {
        let mut repository = MockPersonRepository::new();
        repository
            .expect_find_by_id()
            .return_once(|_| Ok(Some(person(1, 0.0, 0.0))));
        repository
            .expect_all_except()
            .withf(|id| *id == PersonId::new(1))
            .return_once(|_| {
                Ok(vec![
                    person(2, 0.0, 10.0),
                    person(3, 0.0, 1.0),
                    person(4, 0.0, 5.0),
                ])
            });

        let nearest = service(repository)
            .nearest_people(PersonId::new(1), 2)
            .await
            .expect("lookup succeeds");

        let ids: Vec<i64> = nearest.iter().map(|n| n.person.id.get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn nearest_with_single_person_is_empty() {
        let mut repository = MockPersonRepository::new();
        repository
            .expect_find_by_id()
            .return_once(|_| Ok(Some(person(1, 0.0, 0.0))));
        repository.expect_all_except().return_once(|_| Ok(Vec::new()));

        let nearest = service(repository)
            .nearest_people(PersonId::new(1), 5)
            .await
            .expect("lookup succeeds");

        assert!(nearest.is_empty());
    }
}
