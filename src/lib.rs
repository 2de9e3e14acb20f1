//! Country reference data cache.
//!
//! Mirrors a remote country directory and an exchange rate table into a relational cache,
//! derives an estimated GDP per country and serves the result over HTTP.

pub mod model;
pub mod server;
