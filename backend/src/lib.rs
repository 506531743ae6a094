//! Nearby users backend library.
//!
//! Ingests random people from an external source, stores them, and serves
//! random sampling and great-circle nearest-neighbour queries over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
