//! Port abstraction for the durable people record store.
//!
//! The store owns identity assignment and the uniqueness of `email`. Every
//! batch insert is all-or-nothing: when any row of the batch is rejected no
//! row of that batch becomes visible.

use async_trait::async_trait;

use crate::domain::{NewPerson, Person, PersonId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by people store adapters.
    pub enum PersonRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "people store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "people store query failed: {message}",
        /// An inserted email already exists, or appears twice in one batch.
        DuplicateEmail { message: String } => "duplicate email rejected: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persist `people` atomically and return their assigned ids in input order.
    async fn insert_batch(
        &self,
        people: &[NewPerson],
    ) -> Result<Vec<PersonId>, PersonRepositoryError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<u64, PersonRepositoryError>;

    /// Fetch one record by identifier.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError>;

    /// Every record other than `id`, in ascending id order.
    async fn all_except(&self, id: PersonId) -> Result<Vec<Person>, PersonRepositoryError>;

    /// One record drawn uniformly at random, or `None` when the store is empty.
    async fn random(&self) -> Result<Option<Person>, PersonRepositoryError>;
}

/// Fixture store that holds nothing and accepts nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonRepository;

#[async_trait]
impl PersonRepository for FixturePersonRepository {
    async fn insert_batch(
        &self,
        _people: &[NewPerson],
    ) -> Result<Vec<PersonId>, PersonRepositoryError> {
        Err(PersonRepositoryError::connection(
            "fixture people store is read-only",
        ))
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        Ok(0)
    }

    async fn find_by_id(&self, _id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(None)
    }

    async fn all_except(&self, _id: PersonId) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(Vec::new())
    }

    async fn random(&self) -> Result<Option<Person>, PersonRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_is_empty() {
        let repository = FixturePersonRepository;

        assert_eq!(repository.count().await.expect("count"), 0);
        assert!(repository.random().await.expect("random").is_none());
        assert!(
            repository
                .find_by_id(PersonId::new(1))
                .await
                .expect("find")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_rejects_inserts() {
        let err = FixturePersonRepository
            .insert_batch(&[])
            .await
            .expect_err("fixture store is read-only");
        assert!(matches!(err, PersonRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn duplicate_email_message_names_the_cause() {
        let err = PersonRepositoryError::duplicate_email("ada@example.com");
        assert_eq!(
            err.to_string(),
            "duplicate email rejected: ada@example.com"
        );
    }
}
