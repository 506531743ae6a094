//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod people_ingestion_command;
mod people_query;
mod person_repository;
mod person_source;

pub use people_ingestion_command::{
    FixturePeopleIngestionCommand, IngestionOutcome, PeopleIngestionCommand,
};
#[cfg(test)]
pub use people_ingestion_command::MockPeopleIngestionCommand;
#[cfg(test)]
pub use people_query::MockPeopleQuery;
pub use people_query::{FixturePeopleQuery, PeopleQuery};
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{FixturePersonRepository, PersonRepository, PersonRepositoryError};
#[cfg(test)]
pub use person_source::MockPersonSource;
pub use person_source::{FixturePersonSource, PersonSource, PersonSourceError, SourcePerson};
