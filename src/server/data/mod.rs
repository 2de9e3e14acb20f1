//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each repository is
//! generic over [`sea_orm::ConnectionTrait`] so it can run against the connection pool or
//! inside a transaction opened by the refresh pipeline.

pub mod country;
pub mod status;

#[cfg(test)]
mod tests;
