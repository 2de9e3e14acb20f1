//! Tests for CountryRepository::delete_by_name method.

use super::*;

/// Tests deleting a country with a differently cased name.
///
/// Verifies that exactly one row is removed and other countries are untouched.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_country_ignoring_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Testland", None, Some("ABC"), Some(1.0))
        .with_mock_country("Otherland", None, Some("ABC"), Some(2.0))
        .build()
        .await?;

    let country_repo = CountryRepository::new(&test.db);

    assert!(country_repo.delete_by_name("tEsTlAnD").await?);
    assert!(country_repo.find_by_name("Testland").await?.is_none());
    assert!(country_repo.find_by_name("Otherland").await?.is_some());
    assert_eq!(country_repo.count().await?, 1);

    Ok(())
}

/// Tests deleting a country that doesn't exist.
///
/// Expected: Ok(false) with no rows removed
#[tokio::test]
async fn returns_false_for_unknown_country() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_country("Testland", None, None, Some(0.0))
        .build()
        .await?;

    let country_repo = CountryRepository::new(&test.db);

    assert!(!country_repo.delete_by_name("Atlantis").await?);
    assert_eq!(country_repo.count().await?, 1);

    Ok(())
}
