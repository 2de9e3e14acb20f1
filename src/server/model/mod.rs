//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, upstream dataset shapes and the domain types used by the
//! refresh pipeline and query API.

pub mod app;
pub mod country;
pub mod db;
pub mod external;
