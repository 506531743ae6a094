//! RandomUser outbound adapter.
//!
//! Thin HTTP implementation of the `PersonSource` port against the
//! randomuser.me results API or any endpoint speaking the same shape.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_SOURCE_URL, RandomUserHttpSource};
