//! Server application core modules.
//!
//! This module contains all server-side functionality for the country cache, including
//! HTTP routing, the external data gateway, database repositories, the refresh pipeline
//! and summary image generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
