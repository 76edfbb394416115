//! Tests for the automatically maintained user timestamps.

use chrono::{Duration, Utc};
use entity::prelude::*;
use holocron_test_utils::prelude::*;
use sea_orm::{
    sea_query::{Alias, Query},
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, IntoActiveModel,
};

/// Tests that inserting a user stamps both timestamps.
///
/// Expected: created_at equals updated_at and both are recent
#[tokio::test]
async fn stamps_timestamps_on_insert() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let before = Utc::now().naive_utc() - Duration::seconds(1);

    let user = test.user().insert_mock_user(1).await?;

    assert_eq!(user.created_at, user.updated_at);
    assert!(user.created_at >= before);

    Ok(())
}

/// Tests that updating a user touches updated_at but leaves created_at alone.
///
/// Expected: created_at unchanged, updated_at moved forward
#[tokio::test]
async fn touches_updated_at_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let stale = factory::mock_user_model(1);
    User::insert(stale.clone().into_active_model())
        .exec(&test.db)
        .await?;

    let mut active = stale.clone().into_active_model();
    active.name = ActiveValue::Set("Renamed".to_string());
    let updated = active.update(&test.db).await?;

    assert_eq!(updated.created_at, stale.created_at);
    assert!(updated.updated_at > stale.updated_at);

    Ok(())
}

/// Tests the database defaults for rows written without the entity behavior.
///
/// Expected: both timestamps filled in by the database
#[tokio::test]
async fn database_defaults_fill_timestamps() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let mut stmt = Query::insert();
    stmt.into_table(Alias::new("user"))
        .columns([
            Alias::new("email"),
            Alias::new("hashed_password"),
            Alias::new("name"),
        ])
        .values_panic([
            "raw@example.com".into(),
            "hash".into(),
            "Raw Insert".into(),
        ]);
    test.db.execute(&stmt).await?;

    let users = User::find().all(&test.db).await?;

    assert_eq!(users.len(), 1);
    assert!(users[0].created_at <= Utc::now().naive_utc());

    Ok(())
}
