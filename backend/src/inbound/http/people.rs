//! People API handlers.
//!
//! ```text
//! POST /fetch-users/?num_users=10
//! GET /random-user/
//! GET /nearest-users/?uid=1&num_users=5
//! ```

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, ErrorCode, Person};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NUM_USERS, UID, person_id, positive_count};

/// Status text returned after a successful ingestion.
pub const FETCH_STATUS: &str = "Users fetched and stored";

/// Query for `POST /fetch-users/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchUsersParams {
    /// Number of people to fetch; must be positive.
    pub num_users: Option<i64>,
}

/// Query for `GET /nearest-users/`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearestUsersParams {
    /// Id of the reference person.
    pub uid: Option<i64>,
    /// Maximum number of neighbours to return; must be positive.
    pub num_users: Option<i64>,
}

/// Body returned by `POST /fetch-users/`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FetchUsersResponse {
    #[schema(example = "Users fetched and stored")]
    pub status: String,
    /// Batch number shared by every person stored in this call.
    #[schema(example = 1)]
    pub run_id: i64,
}

/// Stored person as returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Batch number of the ingestion that stored this person.
    pub run_id: i64,
    /// Registration time reported by the source, in UTC.
    pub ingestion_time: DateTime<Utc>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.get(),
            email: person.profile.email().to_owned(),
            first_name: person.profile.first_name().to_owned(),
            last_name: person.profile.last_name().to_owned(),
            gender: person.profile.gender().to_owned(),
            latitude: person.coordinate.latitude(),
            longitude: person.coordinate.longitude(),
            run_id: person.batch_id.get(),
            ingestion_time: person.ingested_at,
        }
    }
}

/// Fetch people from the source and store them as one batch.
#[utoipa::path(
    post,
    path = "/fetch-users/",
    params(FetchUsersParams),
    responses(
        (status = 200, description = "People stored", body = FetchUsersResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Source or store failure", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "fetchUsers"
)]
#[post("/fetch-users/")]
pub async fn fetch_users(
    state: web::Data<HttpState>,
    params: web::Query<FetchUsersParams>,
) -> ApiResult<web::Json<FetchUsersResponse>> {
    let count = positive_count(NUM_USERS, params.num_users)?;
    let outcome = state.ingestion.ingest(count).await?;
    info!(
        run_id = outcome.batch_id.get(),
        ingested = outcome.ingested,
        "fetch-users completed"
    );
    Ok(web::Json(FetchUsersResponse {
        status: FETCH_STATUS.to_owned(),
        run_id: outcome.batch_id.get(),
    }))
}

/// Return one stored person chosen uniformly at random.
#[utoipa::path(
    get,
    path = "/random-user/",
    responses(
        (status = 200, description = "Random person", body = PersonResponse),
        (status = 404, description = "Store is empty", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "randomUser"
)]
#[get("/random-user/")]
pub async fn random_user(state: web::Data<HttpState>) -> ApiResult<web::Json<PersonResponse>> {
    state
        .people
        .random_person()
        .await?
        .map(|person| web::Json(PersonResponse::from(person)))
        .ok_or_else(|| Error::not_found("No users found"))
}

/// Return the people closest to `uid`, nearest first.
///
/// An unknown `uid` is a client error (400); an empty ranking is 404.
#[utoipa::path(
    get,
    path = "/nearest-users/",
    params(NearestUsersParams),
    responses(
        (status = 200, description = "People ordered by distance", body = [PersonResponse]),
        (status = 400, description = "Invalid request or unknown uid", body = ErrorSchema),
        (status = 404, description = "No other people stored", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "nearestUsers"
)]
#[get("/nearest-users/")]
pub async fn nearest_users(
    state: web::Data<HttpState>,
    params: web::Query<NearestUsersParams>,
) -> ApiResult<web::Json<Vec<PersonResponse>>> {
    let reference = person_id(UID, params.uid)?;
    let limit = positive_count(NUM_USERS, params.num_users)?;

    let ranked = state
        .people
        .nearest_people(reference, limit as usize)
        .await
        .map_err(unknown_reference_is_client_error)?;
    if ranked.is_empty() {
        return Err(Error::not_found("No nearest users found"));
    }

    Ok(web::Json(
        ranked
            .into_iter()
            .map(|nearby| PersonResponse::from(nearby.person))
            .collect(),
    ))
}

fn unknown_reference_is_client_error(error: Error) -> Error {
    if error.code() == ErrorCode::NotFound {
        Error::invalid_request(error.message()).with_details(json!({
            "field": "uid",
            "code": "unknown_person",
        }))
    } else {
        error
    }
}

#[cfg(test)]
#[path = "people_tests.rs"]
mod tests;
