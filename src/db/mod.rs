pub mod executor;
pub mod models;
pub mod queries;

#[cfg(test)]
pub mod fixtures;

pub use executor::{QueryExecutor, QueryParam};
