//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// People fetched from the random-person source.
    ///
    /// `id` is assigned by the database in insertion order. `email` carries
    /// a unique constraint.
    people (id) {
        /// Primary key assigned from a sequence.
        id -> Int8,
        /// Unique natural identifier from the source.
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        gender -> Text,
        /// Degrees in [-90, 90].
        latitude -> Float8,
        /// Degrees in [-180, 180].
        longitude -> Float8,
        /// Ingestion batch number, at least 1.
        batch_id -> Int8,
        ingested_at -> Timestamptz,
    }
}
