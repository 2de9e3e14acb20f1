//! Test fixture modules for database and HTTP mock creation.
//!
//! - `country` - Cached country rows, the status row and the upstream dataset endpoints

pub mod country;
