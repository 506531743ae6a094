//! Internal Diesel row structs for the `people` table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::people;

/// Row struct for reading from the people table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub latitude: f64,
    pub longitude: f64,
    pub batch_id: i64,
    pub ingested_at: DateTime<Utc>,
}

/// Insertable struct for new people records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = people)]
pub(crate) struct NewPersonRow<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub gender: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub batch_id: i64,
    pub ingested_at: DateTime<Utc>,
}
