//! DTOs for decoding RandomUser JSON responses.
//!
//! Only the fields the people store needs are declared; everything else in
//! the payload is ignored.

use chrono::DateTime;
use serde::Deserialize;

use crate::domain::ports::SourcePerson;

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserResponseDto {
    pub(super) results: Vec<RandomUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserDto {
    pub(super) email: String,
    pub(super) gender: String,
    pub(super) name: NameDto,
    pub(super) location: LocationDto,
    pub(super) registered: RegisteredDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct NameDto {
    pub(super) first: String,
    pub(super) last: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationDto {
    pub(super) coordinates: CoordinatesDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoordinatesDto {
    pub(super) latitude: DegreesDto,
    pub(super) longitude: DegreesDto,
}

/// RandomUser sends coordinates as strings; accept bare numbers as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum DegreesDto {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub(super) struct RegisteredDto {
    pub(super) date: String,
}

impl DegreesDto {
    fn to_degrees(&self, field: &str, email: &str) -> Result<f64, String> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{field} {raw:?} for {email} is not a number")),
        }
    }
}

impl RandomUserResponseDto {
    pub(super) fn into_domain_people(self) -> Result<Vec<SourcePerson>, String> {
        self.results
            .into_iter()
            .map(RandomUserDto::into_domain_person)
            .collect()
    }
}

impl RandomUserDto {
    fn into_domain_person(self) -> Result<SourcePerson, String> {
        let latitude = self
            .location
            .coordinates
            .latitude
            .to_degrees("latitude", &self.email)?;
        let longitude = self
            .location
            .coordinates
            .longitude
            .to_degrees("longitude", &self.email)?;
        let registered_at = parse_registered(&self.registered.date)
            .map_err(|err| format!("registered date for {}: {err}", self.email))?;

        Ok(SourcePerson {
            email: self.email,
            first_name: self.name.first,
            last_name: self.name.last,
            gender: self.gender,
            latitude,
            longitude,
            registered_at,
        })
    }
}

fn parse_registered(raw: &str) -> Result<DateTime<chrono::FixedOffset>, chrono::ParseError> {
    let normalised = match raw.strip_suffix('Z') {
        Some(prefix) => format!("{prefix}+00:00"),
        None => raw.to_owned(),
    };
    DateTime::parse_from_rfc3339(&normalised)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("2007-07-09T05:51:59.390Z", 0)]
    #[case("2015-06-01T12:00:00+02:00", 7200)]
    fn parses_registration_offsets(#[case] raw: &str, #[case] offset_secs: i32) {
        let parsed = parse_registered(raw).expect("valid timestamp");
        assert_eq!(parsed.offset().local_minus_utc(), offset_secs);
    }

    #[rstest]
    fn utc_suffix_matches_explicit_offset() {
        let zulu = parse_registered("2020-01-01T00:00:00Z").expect("valid");
        let expected = Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .expect("valid");
        assert_eq!(zulu.with_timezone(&Utc), expected);
    }

    #[rstest]
    fn rejects_non_numeric_text_coordinates() {
        let degrees = DegreesDto::Text("north".to_owned());
        assert!(degrees.to_degrees("latitude", "a@b.c").is_err());
    }
}
