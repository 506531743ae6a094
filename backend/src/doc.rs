//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the people endpoints, the health probes, and the
//! error schema wrappers from the inbound layer. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::people::{FetchUsersResponse, PersonResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nearby users API",
        description = "Ingest random people and query them by great-circle proximity."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::people::fetch_users,
        crate::inbound::http::people::random_user,
        crate::inbound::http::people::nearest_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(FetchUsersResponse, PersonResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "people", description = "Ingestion, sampling, and proximity queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
