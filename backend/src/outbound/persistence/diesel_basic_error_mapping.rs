//! Diesel and pool error mapping for the people repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PersonRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    PersonRepositoryError::connection(error.into_message())
}

/// Map Diesel failures onto people repository errors.
///
/// Unique violations become `DuplicateEmail`; the only unique index on
/// `people` besides the primary key is the email column.
pub(super) fn map_diesel_error(error: DieselError) -> PersonRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            PersonRepositoryError::duplicate_email(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            PersonRepositoryError::query(format!("check constraint failed: {}", info.message()))
        }
        DieselError::NotFound => PersonRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersonRepositoryError::query("database query error"),
        _ => PersonRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, PersonRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        let mapped = map_diesel_error(DieselError::NotFound);
        assert!(matches!(mapped, PersonRepositoryError::Query { .. }));
    }

    #[rstest]
    fn unique_violation_becomes_duplicate_email() {
        let mapped = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates people_email_key")),
        ));
        assert_eq!(
            mapped,
            PersonRepositoryError::duplicate_email("duplicate key value violates people_email_key")
        );
    }
}
