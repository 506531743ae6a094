//! Query parameter validation for the people endpoints.

use actix_web::{HttpRequest, error::QueryPayloadError, web};
use serde_json::json;

use crate::domain::{Error, PersonId};

/// Name of a query parameter, used in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

pub(crate) const NUM_USERS: FieldName = FieldName::new("num_users");
pub(crate) const UID: FieldName = FieldName::new("uid");

fn field_error(field: FieldName, code: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.0,
        "code": code,
    }))
}

fn require(field: FieldName, value: Option<i64>) -> Result<i64, Error> {
    value.ok_or_else(|| field_error(field, "missing_field", format!("{} is required", field.0)))
}

/// Validate a required positive count that fits the source's request size.
pub(crate) fn positive_count(field: FieldName, value: Option<i64>) -> Result<u32, Error> {
    let raw = require(field, value)?;
    if raw <= 0 {
        return Err(field_error(
            field,
            "not_positive",
            format!("{} must be a positive integer", field.0),
        ));
    }
    u32::try_from(raw).map_err(|_| {
        field_error(
            field,
            "out_of_range",
            format!("{} must not exceed {}", field.0, u32::MAX),
        )
    })
}

/// Validate a required person identifier.
pub(crate) fn person_id(field: FieldName, value: Option<i64>) -> Result<PersonId, Error> {
    require(field, value).map(PersonId::new)
}

/// Query extractor configuration rendering parse failures as domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        Error::invalid_request(format!("invalid query string: {err}"))
            .with_details(json!({ "code": "invalid_query" }))
            .into()
    })
}
