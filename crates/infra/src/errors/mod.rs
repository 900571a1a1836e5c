//! Conversions from external infrastructure errors into domain errors.

mod conversions;

pub use conversions::InfraError;
pub(crate) use conversions::map_status;
