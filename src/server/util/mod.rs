//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers for timestamp rendering and number formatting
//! shared by the HTTP responses and the summary image.

pub mod format;
pub mod time;
