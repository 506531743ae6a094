//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod people;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;
pub use validation::query_config;

use actix_web::web;

/// Register the people endpoints and their query extractor settings.
///
/// Callers attach `web::Data<HttpState>` themselves.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use nearby_users::inbound::http::configure_people;
///
/// let _app = App::new().configure(configure_people);
/// ```
pub fn configure_people(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(people::fetch_users)
        .service(people::random_user)
        .service(people::nearest_users);
}
