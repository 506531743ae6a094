//! Shared mapping from people store failures to domain errors.

use tracing::warn;

use super::Error;
use super::ports::PersonRepositoryError;

/// Client-facing text for a rejected batch; the store's detail is only logged.
pub(crate) const DUPLICATE_EMAIL_MESSAGE: &str = "One or more emails are already stored";

pub(crate) fn map_repository_error(error: PersonRepositoryError) -> Error {
    match error {
        PersonRepositoryError::DuplicateEmail { message } => {
            warn!(%message, "people batch rejected by uniqueness constraint");
            Error::constraint_violation(DUPLICATE_EMAIL_MESSAGE)
        }
        PersonRepositoryError::Connection { message }
        | PersonRepositoryError::Query { message } => Error::internal(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(PersonRepositoryError::duplicate_email("a@b.c"), ErrorCode::ConstraintViolation)]
    #[case(PersonRepositoryError::connection("refused"), ErrorCode::InternalError)]
    #[case(PersonRepositoryError::query("syntax"), ErrorCode::InternalError)]
    fn maps_each_variant(#[case] error: PersonRepositoryError, #[case] expected: ErrorCode) {
        assert_eq!(map_repository_error(error).code(), expected);
    }

    #[rstest]
    fn duplicate_email_hides_store_detail() {
        let error = map_repository_error(PersonRepositoryError::duplicate_email(
            "duplicate key value violates unique constraint \"people_email_key\"",
        ));
        assert_eq!(error.message(), DUPLICATE_EMAIL_MESSAGE);
        assert!(error.details().is_none());
    }
}
