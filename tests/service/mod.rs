//! Tests for the service layer.
//!
//! This module contains integration tests for the refresh pipeline and the query
//! services, run against an in-memory database and mock upstream datasets.


use country_cache_test_utils::prelude::*;

use crate::util::TestContextExt;
