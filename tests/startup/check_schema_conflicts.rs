use holocron::{error::Error, startup::check_schema_conflicts};
use holocron_test_utils::prelude::*;
use sea_orm::ConnectionTrait;

/// Tests that an empty database has nothing to conflict with.
///
/// Expected: Ok
#[tokio::test]
async fn passes_for_empty_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    assert!(check_schema_conflicts(&test.db).await.is_ok());

    Ok(())
}

/// Tests that a fully migrated database passes.
///
/// Expected: Ok
#[tokio::test]
async fn passes_for_migrated_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    assert!(check_schema_conflicts(&test.db).await.is_ok());

    Ok(())
}

/// Tests that a user table missing its timestamps is reported.
///
/// Expected: Err with SchemaConflict naming user.created_at
#[tokio::test]
async fn reports_missing_column() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared(
            "CREATE TABLE user (id INTEGER PRIMARY KEY, email TEXT NOT NULL UNIQUE, \
             hashed_password TEXT NOT NULL, name TEXT NOT NULL)",
        )
        .await?;

    let result = check_schema_conflicts(&test.db).await;

    assert!(matches!(
        result,
        Err(Error::SchemaConflict { ref table, ref column, reason })
            if table == "user" && column == "created_at" && reason == "is missing"
    ));

    Ok(())
}

/// Tests that a column the catalog requires but storage leaves nullable is reported.
///
/// Expected: Err with SchemaConflict naming color.name as accepting NULL
#[tokio::test]
async fn reports_nullable_required_column() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared("CREATE TABLE color (id INTEGER PRIMARY KEY, name TEXT UNIQUE)")
        .await?;

    let result = check_schema_conflicts(&test.db).await;

    assert!(matches!(
        result,
        Err(Error::SchemaConflict { ref table, ref column, reason })
            if table == "color" && column == "name" && reason == "accepts NULL"
    ));

    Ok(())
}

/// Tests that a column the catalog declares unique but storage does not is reported.
///
/// Expected: Err with SchemaConflict naming color.name as not unique
#[tokio::test]
async fn reports_column_missing_unique_constraint() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared("CREATE TABLE color (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    let result = check_schema_conflicts(&test.db).await;

    assert!(matches!(
        result,
        Err(Error::SchemaConflict { ref table, ref column, reason })
            if table == "color" && column == "name" && reason == "is not unique"
    ));

    Ok(())
}

/// Tests that a unique index spanning more than the column does not count as column uniqueness.
///
/// Expected: Err with SchemaConflict naming color.name as not unique
#[tokio::test]
async fn ignores_composite_unique_index_for_column() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared("CREATE TABLE color (id INTEGER PRIMARY KEY, name TEXT NOT NULL, hue TEXT)")
        .await?;
    test.db
        .execute_unprepared("CREATE UNIQUE INDEX color_name_hue ON color (name, hue)")
        .await?;

    let result = check_schema_conflicts(&test.db).await;

    assert!(matches!(
        result,
        Err(Error::SchemaConflict { ref column, reason, .. })
            if column == "name" && reason == "is not unique"
    ));

    Ok(())
}

/// Tests that a hand-made table carrying the catalog's constraints is accepted.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_constrained_existing_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared("CREATE TABLE color (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE)")
        .await?;

    assert!(check_schema_conflicts(&test.db).await.is_ok());

    Ok(())
}
