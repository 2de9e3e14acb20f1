//! Tests for CountryRepository::find_by_name method.

use super::*;

/// Tests finding a country regardless of the case of the requested name.
///
/// Expected: Ok(Some) for every casing
#[tokio::test]
async fn finds_country_ignoring_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Testland", None, Some("ABC"), Some(1.0))
        .build()
        .await?;

    let country_repo = CountryRepository::new(&test.db);

    for name in ["Testland", "testland", "TESTLAND", " tEsTlAnD "] {
        let country = country_repo.find_by_name(name).await?;
        assert_eq!(
            country.map(|c| c.name),
            Some("Testland".to_string()),
            "lookup of {:?}",
            name
        );
    }

    Ok(())
}

/// Tests finding a country that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_country() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Testland", None, None, Some(0.0))
        .build()
        .await?;

    let country_repo = CountryRepository::new(&test.db);

    assert!(country_repo.find_by_name("Atlantis").await?.is_none());
    assert!(country_repo.find_by_name("Testlan").await?.is_none());

    Ok(())
}
