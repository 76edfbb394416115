//! Tests for creating the catalog schema in a live database.

use entity::prelude::*;
use holocron::{error::Error, schema::catalog, startup::materialize_schema};
use holocron_test_utils::prelude::*;
use migration::SchemaManager;
use sea_orm::{ConnectionTrait, EntityTrait};

/// Tests that every catalog table is created in an empty database.
///
/// Expected: Ok with all 29 tables present
#[tokio::test]
async fn creates_every_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    materialize_schema(&test.db).await.unwrap();

    let manager = SchemaManager::new(&test.db);
    for table in catalog().tables() {
        assert!(manager.has_table(table.name).await?, "missing {}", table.name);
    }

    Ok(())
}

/// Tests that running twice is a no-op that keeps existing rows.
///
/// Expected: Ok both times with the inserted planet still present
#[tokio::test]
async fn is_idempotent_and_keeps_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    materialize_schema(&test.db).await.unwrap();
    test.world().insert_mock_planet(1).await?;
    materialize_schema(&test.db).await.unwrap();

    assert_eq!(Planet::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Tests that a compatible pre-existing table is kept rather than recreated.
///
/// Expected: Ok with the row inserted before materializing still present
#[tokio::test]
async fn keeps_compatible_existing_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(Planet)
        .with_mock_planet(1)
        .build()
        .await?;

    materialize_schema(&test.db).await.unwrap();

    assert!(Planet::find_by_id(1).one(&test.db).await?.is_some());

    Ok(())
}

/// Tests that an incompatible pre-existing table aborts before anything is created.
///
/// Expected: Err with SchemaConflict naming planet.diameter and no film table
#[tokio::test]
async fn fails_on_conflicting_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared("CREATE TABLE planet (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    let result = materialize_schema(&test.db).await;

    assert!(matches!(
        result,
        Err(Error::SchemaConflict { ref table, ref column, .. })
            if table == "planet" && column == "diameter"
    ));
    assert!(!SchemaManager::new(&test.db).has_table("film").await?);

    Ok(())
}
