//! PostgreSQL-backed people repository.

use async_trait::async_trait;
use diesel::OptionalExtension;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{
    BatchId, Coordinate, NewPerson, Person, PersonId, PersonProfile, PersonValidationError,
};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPersonRow, PersonRow};
use super::pool::DbPool;
use super::schema::people;

diesel::define_sql_function! {
    /// PostgreSQL `random()`, used to order rows for uniform sampling.
    fn random() -> diesel::sql_types::Double;
}

/// PostgreSQL accepts at most this many bind parameters per statement.
const MAX_BIND_PARAMS: usize = 65_535;
/// Bound columns per inserted row.
const INSERT_COLUMNS: usize = 8;
/// Rows per `INSERT` statement; all chunks of a batch share one transaction.
const INSERT_CHUNK_ROWS: usize = MAX_BIND_PARAMS / INSERT_COLUMNS;

/// Diesel-backed implementation of [`PersonRepository`].
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_insert_row(person: &NewPerson) -> NewPersonRow<'_> {
    NewPersonRow {
        email: person.profile.email(),
        first_name: person.profile.first_name(),
        last_name: person.profile.last_name(),
        gender: person.profile.gender(),
        latitude: person.coordinate.latitude(),
        longitude: person.coordinate.longitude(),
        batch_id: person.batch_id.get(),
        ingested_at: person.ingested_at,
    }
}

fn corrupt_row(id: i64, error: PersonValidationError) -> PersonRepositoryError {
    PersonRepositoryError::query(format!("stored person {id} is invalid: {error}"))
}

impl TryFrom<PersonRow> for Person {
    type Error = PersonRepositoryError;

    fn try_from(row: PersonRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let profile = PersonProfile::new(row.email, row.first_name, row.last_name, row.gender)
            .map_err(|err| corrupt_row(id, err))?;
        let coordinate =
            Coordinate::new(row.latitude, row.longitude).map_err(|err| corrupt_row(id, err))?;
        let batch_id = BatchId::new(row.batch_id).map_err(|err| corrupt_row(id, err))?;
        Ok(Person {
            id: PersonId::new(id),
            profile,
            coordinate,
            batch_id,
            ingested_at: row.ingested_at,
        })
    }
}

fn rows_into_people(rows: Vec<PersonRow>) -> Result<Vec<Person>, PersonRepositoryError> {
    rows.into_iter().map(Person::try_from).collect()
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn insert_batch(&self, people: &[NewPerson]) -> Result<Vec<PersonId>, PersonRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        if people.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<NewPersonRow<'_>> = people.iter().map(to_insert_row).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let ids: Vec<i64> = conn
            .transaction(|conn| {
                async move {
                    let mut ids = Vec::with_capacity(rows.len());
                    for chunk in rows.chunks(INSERT_CHUNK_ROWS) {
                        let inserted: Vec<i64> = diesel::insert_into(people::table)
                            .values(chunk)
                            .returning(people::id)
                            .get_results(conn)
                            .await?;
                        ids.extend(inserted);
                    }
                    Ok::<_, diesel::result::Error>(ids)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(ids.into_iter().map(PersonId::new).collect())
    }

    async fn count(&self) -> Result<u64, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = people::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total).map_err(|_| PersonRepositoryError::query("negative row count"))
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = people::table
            .filter(people::id.eq(id.get()))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Person::try_from).transpose()
    }

    async fn all_except(&self, id: PersonId) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = people::table
            .filter(people::id.ne(id.get()))
            .order(people::id.asc())
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into_people(rows)
    }

    async fn random(&self) -> Result<Option<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = people::table
            .order(random())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Person::try_from).transpose()
    }
}
