//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed people records, the distance maths used
//! to rank them, and the services that drive ingestion and lookup. Adapters
//! live outside this module and reach the domain only through `ports`.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Person / NewPerson: stored and to-be-stored people records.
//! - PeopleIngestionService / PeopleQueryService: driving port services.

pub mod error;
pub mod people;
mod people_ingestion;
mod people_query;
pub mod ports;
pub mod proximity;
mod repository_errors;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::people::{
    BatchId, Coordinate, NewPerson, Person, PersonId, PersonProfile, PersonValidationError,
};
pub use self::people_ingestion::PeopleIngestionService;
pub use self::people_query::PeopleQueryService;
pub use self::proximity::{EARTH_RADIUS_KM, NearbyPerson, haversine_km, rank_nearest};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use nearby_users::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
