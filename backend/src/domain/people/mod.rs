//! People records ingested from the random-person source.
//!
//! Records come in two explicit shapes: [`NewPerson`] is what ingestion hands
//! to the store, [`Person`] is what the store hands back once it has assigned
//! an identity. Both compose the same validated parts ([`PersonProfile`],
//! [`Coordinate`], [`BatchId`]) rather than one extending the other.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Validation errors raised by the people constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersonValidationError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("first name must not be empty")]
    EmptyFirstName,
    #[error("last name must not be empty")]
    EmptyLastName,
    #[error("gender must not be empty")]
    EmptyGender,
    #[error("latitude must be finite and within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must be finite and within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
    #[error("batch id must be at least 1, got {0}")]
    InvalidBatchId(i64),
}

/// Store-assigned identity of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier shared by every record stored by one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(i64);

impl BatchId {
    /// Validate and wrap a batch number; batches are numbered from 1.
    pub fn new(raw: i64) -> Result<Self, PersonValidationError> {
        if raw < 1 {
            return Err(PersonValidationError::InvalidBatchId(raw));
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point on the globe in decimal degrees.
///
/// ## Invariants
/// - `latitude` is finite and within `[-90, 90]`.
/// - `longitude` is finite and within `[-180, 180]`.
///
/// # Examples
/// ```
/// use nearby_users::domain::Coordinate;
///
/// let origin = Coordinate::new(0.0, 0.0).expect("valid coordinate");
/// assert_eq!(origin.latitude(), 0.0);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PersonValidationError> {
        if !valid_latitude(latitude) {
            return Err(PersonValidationError::LatitudeOutOfRange(latitude));
        }
        if !valid_longitude(longitude) {
            return Err(PersonValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[rustfmt::skip]
fn valid_latitude(value: f64) -> bool { value.is_finite() && (-90.0..=90.0).contains(&value) }

#[rustfmt::skip]
fn valid_longitude(value: f64) -> bool { value.is_finite() && (-180.0..=180.0).contains(&value) }

/// Descriptive fields of a person as provided by the source.
///
/// `gender` is free text; the source decides its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonProfile {
    email: String,
    first_name: String,
    last_name: String,
    gender: String,
}

impl PersonProfile {
    /// Validate and construct a profile. All fields must be non-blank.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
    ) -> Result<Self, PersonValidationError> {
        let profile = Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
        };
        if profile.email.trim().is_empty() {
            return Err(PersonValidationError::EmptyEmail);
        }
        if profile.first_name.trim().is_empty() {
            return Err(PersonValidationError::EmptyFirstName);
        }
        if profile.last_name.trim().is_empty() {
            return Err(PersonValidationError::EmptyLastName);
        }
        if profile.gender.trim().is_empty() {
            return Err(PersonValidationError::EmptyGender);
        }
        Ok(profile)
    }

    /// Unique natural identifier from the source.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn gender(&self) -> &str {
        self.gender.as_str()
    }
}

/// A record ready to be inserted; the store assigns its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub profile: PersonProfile,
    pub coordinate: Coordinate,
    pub batch_id: BatchId,
    pub ingested_at: DateTime<Utc>,
}

/// A stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub profile: PersonProfile,
    pub coordinate: Coordinate,
    pub batch_id: BatchId,
    pub ingested_at: DateTime<Utc>,
}

impl Person {
    /// Attach a store-assigned identity to an inserted record.
    #[must_use]
    pub fn from_new(id: PersonId, new_person: NewPerson) -> Self {
        let NewPerson {
            profile,
            coordinate,
            batch_id,
            ingested_at,
        } = new_person;
        Self {
            id,
            profile,
            coordinate,
            batch_id,
            ingested_at,
        }
    }
}
