//! Tests for CountryRepository::top_by_gdp method.

use super::*;

/// Tests limiting the GDP leaders.
///
/// Verifies that known GDP values rank before unknown ones and the limit is applied.
///
/// Expected: Ok with the largest GDP values first
#[tokio::test]
async fn returns_leaders_limited() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_cache_tables();
    for i in 0..7 {
        builder = builder.with_mock_country(
            &format!("Country {}", i),
            None,
            Some("ABC"),
            Some(i as f64 * 10.0),
        );
    }
    let test = builder
        .with_mock_country("Unknown", None, Some("XYZ"), None)
        .build()
        .await?;

    let leaders = CountryRepository::new(&test.db).top_by_gdp(5).await?;

    let gdps: Vec<Option<f64>> = leaders.iter().map(|c| c.estimated_gdp).collect();
    assert_eq!(
        gdps,
        vec![Some(60.0), Some(50.0), Some(40.0), Some(30.0), Some(20.0)]
    );

    Ok(())
}

/// Tests that countries with unknown GDP fill the list only after known values.
///
/// Expected: Ok with the unknown GDP country last
#[tokio::test]
async fn ranks_unknown_gdp_last() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Unknown", None, Some("XYZ"), None)
        .with_mock_country("Nocoin", None, None, Some(0.0))
        .build()
        .await?;

    let leaders = CountryRepository::new(&test.db).top_by_gdp(5).await?;

    let names: Vec<&str> = leaders.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Nocoin", "Unknown"]);

    Ok(())
}
