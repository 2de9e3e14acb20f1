//! Tests for CountryRepository::list method.
//!
//! This module verifies region and currency filters, GDP sorting with unknown GDP last
//! and the default name ordering.

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Gamma", Some("Europe"), Some("EUR"), Some(300.0))
        .with_mock_country("Alpha", Some("Africa"), Some("NGN"), None)
        .with_mock_country("Delta", Some("europe"), Some("EUR"), Some(100.0))
        .with_mock_country("Beta", Some("Asia"), None, Some(0.0))
        .with_mock_country("Epsilon", None, Some("JPY"), Some(200.0))
        .build()
        .await
}

fn names(countries: &[entity::country::Model]) -> Vec<&str> {
    countries.iter().map(|c| c.name.as_str()).collect()
}

/// Tests listing without filters.
///
/// Expected: Ok with every country ordered by name
#[tokio::test]
async fn lists_all_by_name() -> Result<(), TestError> {
    let test = setup().await?;

    let countries = CountryRepository::new(&test.db)
        .list(&CountryFilter::default())
        .await?;

    assert_eq!(
        names(&countries),
        vec!["Alpha", "Beta", "Delta", "Epsilon", "Gamma"]
    );

    Ok(())
}

/// Tests filtering by region ignoring case.
///
/// Expected: Ok with both European countries
#[tokio::test]
async fn filters_by_region_ignoring_case() -> Result<(), TestError> {
    let test = setup().await?;

    let filter = CountryFilter {
        region: Some("EUROPE".to_string()),
        ..Default::default()
    };
    let countries = CountryRepository::new(&test.db).list(&filter).await?;

    assert_eq!(names(&countries), vec!["Delta", "Gamma"]);

    Ok(())
}

/// Tests filtering by currency ignoring case.
///
/// Expected: Ok with the countries using EUR
#[tokio::test]
async fn filters_by_currency_ignoring_case() -> Result<(), TestError> {
    let test = setup().await?;

    let filter = CountryFilter {
        currency: Some("eur".to_string()),
        ..Default::default()
    };
    let countries = CountryRepository::new(&test.db).list(&filter).await?;

    assert_eq!(names(&countries), vec!["Delta", "Gamma"]);

    Ok(())
}

/// Tests combining both filters.
///
/// Expected: Ok with no countries when nothing matches both
#[tokio::test]
async fn combines_filters() -> Result<(), TestError> {
    let test = setup().await?;

    let filter = CountryFilter {
        region: Some("Africa".to_string()),
        currency: Some("EUR".to_string()),
        ..Default::default()
    };
    let countries = CountryRepository::new(&test.db).list(&filter).await?;

    assert!(countries.is_empty());

    Ok(())
}

/// Tests sorting by GDP descending.
///
/// Expected: Ok with non-increasing GDP and unknown GDP last
#[tokio::test]
async fn sorts_by_gdp_desc_with_nulls_last() -> Result<(), TestError> {
    let test = setup().await?;

    let filter = CountryFilter {
        sort: CountrySort::GdpDesc,
        ..Default::default()
    };
    let countries = CountryRepository::new(&test.db).list(&filter).await?;

    assert_eq!(
        names(&countries),
        vec!["Gamma", "Epsilon", "Delta", "Beta", "Alpha"]
    );

    Ok(())
}

/// Tests sorting by GDP ascending.
///
/// Expected: Ok with non-decreasing GDP and unknown GDP still last
#[tokio::test]
async fn sorts_by_gdp_asc_with_nulls_last() -> Result<(), TestError> {
    let test = setup().await?;

    let filter = CountryFilter {
        sort: CountrySort::GdpAsc,
        ..Default::default()
    };
    let countries = CountryRepository::new(&test.db).list(&filter).await?;

    assert_eq!(
        names(&countries),
        vec!["Beta", "Delta", "Epsilon", "Gamma", "Alpha"]
    );

    Ok(())
}
