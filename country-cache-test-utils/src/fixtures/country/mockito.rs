//! Upstream HTTP mock endpoint creation utilities.
//!
//! Endpoints are registered with the mockito server and verify they were called the
//! expected number of times.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::{TEST_COUNTRIES_PATH, TEST_EXCHANGE_RATES_PATH},
    fixtures::country::CountryFixtures,
};

impl<'a> CountryFixtures<'a> {
    /// Create a mock country directory returning `countries` as a JSON array.
    pub fn create_countries_endpoint(
        &mut self,
        countries: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_COUNTRIES_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(countries).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock exchange rate table returning `body` as JSON.
    pub fn create_exchange_rates_endpoint(
        &mut self,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_EXCHANGE_RATES_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
