//! Tests for CountryRepository::upsert_many method.
//!
//! This module verifies inserting new countries, overwriting existing countries by
//! case-insensitive name and empty input.

use super::*;

/// Tests inserting new countries.
///
/// Verifies that every record is inserted with its fields and the refresh timestamp.
///
/// Expected: Ok with one row per record
#[tokio::test]
async fn inserts_new_countries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;

    let country_repo = CountryRepository::new(&test.db);
    country_repo
        .upsert_many(
            vec![
                record("Testland", Some("ABC"), Some(750_000_000.0)),
                record("Nocoin", None, Some(0.0)),
            ],
            timestamp(10),
        )
        .await?;

    assert_eq!(country_repo.count().await?, 2);

    let testland = country_repo.find_by_name("Testland").await?.unwrap();
    assert_eq!(testland.name_key, "testland");
    assert_eq!(testland.currency_code.as_deref(), Some("ABC"));
    assert_eq!(testland.exchange_rate, Some(2.0));
    assert_eq!(testland.estimated_gdp, Some(750_000_000.0));
    assert_eq!(testland.last_refreshed_at, timestamp(10));

    Ok(())
}

/// Tests overwriting an existing country.
///
/// Verifies that upserting a country whose name differs only in case replaces every
/// field of the existing row, including the display name, instead of adding a row.
///
/// Expected: Ok with a single overwritten row
#[tokio::test]
async fn overwrites_existing_country_ignoring_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Testland", Some("Europe"), Some("EUR"), Some(10.0))
        .build()
        .await?;

    let country_repo = CountryRepository::new(&test.db);
    let existing = country_repo.find_by_name("Testland").await?.unwrap();

    country_repo
        .upsert_many(vec![record("TESTLAND", Some("ABC"), None)], timestamp(11))
        .await?;

    assert_eq!(country_repo.count().await?, 1);

    let updated = country_repo.find_by_name("testland").await?.unwrap();
    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "TESTLAND");
    assert_eq!(updated.region.as_deref(), Some("Testregion"));
    assert_eq!(updated.currency_code.as_deref(), Some("ABC"));
    assert_eq!(updated.estimated_gdp, None);
    assert_eq!(updated.last_refreshed_at, timestamp(11));

    Ok(())
}

/// Tests upserting more countries than fit in one batch.
///
/// Expected: Ok with every country inserted
#[tokio::test]
async fn inserts_across_batches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;

    let countries = (0..250)
        .map(|i| record(&format!("Country {}", i), Some("ABC"), Some(i as f64)))
        .collect();

    let country_repo = CountryRepository::new(&test.db);
    country_repo.upsert_many(countries, timestamp(10)).await?;

    assert_eq!(country_repo.count().await?, 250);

    Ok(())
}

/// Tests upserting an empty list.
///
/// Expected: Ok with no rows written
#[tokio::test]
async fn empty_input_writes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;

    let country_repo = CountryRepository::new(&test.db);
    country_repo.upsert_many(Vec::new(), timestamp(10)).await?;

    assert_eq!(country_repo.count().await?, 0);

    Ok(())
}

/// Tests error handling when the country table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_are_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let country_repo = CountryRepository::new(&test.db);
    let result = country_repo
        .upsert_many(vec![record("Testland", None, Some(0.0))], timestamp(10))
        .await;

    assert!(result.is_err());

    Ok(())
}
