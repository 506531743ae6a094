//! Reqwest-backed RandomUser source adapter.
//!
//! Owns transport details only: URL construction, timeout and status
//! mapping, and JSON decoding into source people. Failed requests are not
//! retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::RandomUserResponseDto;
use crate::domain::ports::{PersonSource, PersonSourceError, SourcePerson};

/// Public RandomUser endpoint used when no override is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://randomuser.me/api/";
const USER_AGENT: &str = concat!("nearby-users/", env!("CARGO_PKG_VERSION"));

/// Person source that issues `GET {endpoint}?results={count}` requests.
pub struct RandomUserHttpSource {
    client: Client,
    endpoint: Url,
}

impl RandomUserHttpSource {
    /// Build an adapter with an explicit whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn request_url(&self, count: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("results", &count.to_string());
        url
    }
}

#[async_trait]
impl PersonSource for RandomUserHttpSource {
    async fn fetch_people(&self, count: u32) -> Result<Vec<SourcePerson>, PersonSourceError> {
        let url = self.request_url(count);
        debug!(%url, "requesting people from source");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_people(body.as_ref())
    }
}

fn parse_people(body: &[u8]) -> Result<Vec<SourcePerson>, PersonSourceError> {
    let decoded: RandomUserResponseDto = serde_json::from_slice(body).map_err(|error| {
        PersonSourceError::decode(format!("invalid RandomUser JSON payload: {error}"))
    })?;
    decoded
        .into_domain_people()
        .map_err(PersonSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> PersonSourceError {
    if error.is_timeout() {
        PersonSourceError::timeout(error.to_string())
    } else {
        PersonSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PersonSourceError {
    warn!(
        status = status.as_u16(),
        body = %body_preview(body),
        "person source rejected request"
    );
    PersonSourceError::status(status.as_u16())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network RandomUser mapping helpers.

    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Ada", "last": "Lovelace" },
                "location": {
                    "city": "London",
                    "coordinates": { "latitude": "51.5072", "longitude": "-0.1276" }
                },
                "email": "ada@example.test",
                "registered": { "date": "2007-07-09T05:51:59.390Z", "age": 17 }
            },
            {
                "gender": "male",
                "name": { "first": "Alan", "last": "Turing" },
                "location": { "coordinates": { "latitude": 52.2, "longitude": 0.12 } },
                "email": "alan@example.test",
                "registered": { "date": "2010-01-01T00:00:00+01:00" }
            }
        ],
        "info": { "seed": "abc", "results": 2 }
    }"#;

    #[rstest]
    fn appends_results_parameter() {
        let endpoint = Url::parse(DEFAULT_SOURCE_URL).expect("valid url");
        let source =
            RandomUserHttpSource::new(endpoint, Duration::from_secs(1)).expect("client builds");
        assert_eq!(
            source.request_url(25).as_str(),
            "https://randomuser.me/api/?results=25"
        );
    }

    #[rstest]
    fn preserves_existing_query_parameters() {
        let endpoint = Url::parse("http://localhost:9000/api/?nat=gb").expect("valid url");
        let source =
            RandomUserHttpSource::new(endpoint, Duration::from_secs(1)).expect("client builds");
        assert_eq!(
            source.request_url(3).as_str(),
            "http://localhost:9000/api/?nat=gb&results=3"
        );
    }

    #[rstest]
    fn parses_string_and_numeric_coordinates() {
        let people = parse_people(SAMPLE.as_bytes()).expect("payload decodes");

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].email, "ada@example.test");
        assert_eq!(people[0].first_name, "Ada");
        assert!((people[0].latitude - 51.5072).abs() < 1e-9);
        assert!((people[1].longitude - 0.12).abs() < 1e-9);
        let expected = Utc
            .with_ymd_and_hms(2009, 12, 31, 23, 0, 0)
            .single()
            .expect("valid");
        assert_eq!(people[1].registered_at.with_timezone(&Utc), expected);
    }

    #[rstest]
    #[case(r#"{"info": {}}"#)]
    #[case(r#"{"results": [{"email": "x@y.z"}]}"#)]
    #[case("not json")]
    fn malformed_payloads_map_to_decode(#[case] body: &str) {
        let error = parse_people(body.as_bytes()).expect_err("decode fails");
        assert!(matches!(error, PersonSourceError::Decode { .. }));
    }

    #[rstest]
    #[case(StatusCode::SERVICE_UNAVAILABLE)]
    #[case(StatusCode::TOO_MANY_REQUESTS)]
    #[case(StatusCode::NOT_FOUND)]
    fn non_success_statuses_carry_code(#[case] status: StatusCode) {
        let error = map_status_error(status, b"<html>down</html>");
        assert_eq!(error, PersonSourceError::status(status.as_u16()));
    }

    #[rstest]
    fn body_preview_truncates_long_bodies() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
