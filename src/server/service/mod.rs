//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories, the external data gateway and the summary image generator. Services
//! include the refresh pipeline, GDP estimation, country queries and status reads.

pub mod country;
pub mod gdp;
pub mod refresh;
pub mod status;
pub mod summary;
