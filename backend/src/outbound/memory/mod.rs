//! In-process people store for development and tests.
//!
//! Mirrors the PostgreSQL adapter: ids are assigned in insertion order,
//! emails are unique, and each batch is applied all-or-nothing.

use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{NewPerson, Person, PersonId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    people: Vec<Person>,
    emails: HashSet<String>,
}

/// People repository backed by a vector behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    store: RwLock<Store>,
}

impl InMemoryPersonRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(|err| err.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn insert_batch(&self, people: &[NewPerson]) -> Result<Vec<PersonId>, PersonRepositoryError> {
        let mut store = self.write();

        let mut batch_emails = HashSet::with_capacity(people.len());
        for person in people {
            let email = person.profile.email();
            if store.emails.contains(email) || !batch_emails.insert(email) {
                return Err(PersonRepositoryError::duplicate_email(email));
            }
        }

        let mut ids = Vec::with_capacity(people.len());
        for person in people {
            store.last_id += 1;
            let id = PersonId::new(store.last_id);
            store.emails.insert(person.profile.email().to_owned());
            store.people.push(Person::from_new(id, person.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        Ok(self.read().people.len() as u64)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let store = self.read();
        // Ids are pushed in ascending order.
        Ok(store
            .people
            .binary_search_by_key(&id, |person| person.id)
            .ok()
            .map(|index| store.people[index].clone()))
    }

    async fn all_except(&self, id: PersonId) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(self
            .read()
            .people
            .iter()
            .filter(|person| person.id != id)
            .cloned()
            .collect())
    }

    async fn random(&self) -> Result<Option<Person>, PersonRepositoryError> {
        let store = self.read();
        Ok(store.people.choose(&mut rand::thread_rng()).cloned())
    }
}
