use entity::prelude::ItemType;
use holocron::model::favorite::FavoriteItem;
use holocron_test_utils::prelude::*;
use sea_orm::ActiveModelTrait;

/// Tests that a favorite saved from the typed view reads back as the same item.
///
/// Expected: Ok with the stored row converting back to FavoriteItem::Planet(1)
#[tokio::test]
async fn saves_and_reads_typed_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(1)
        .build()
        .await?;

    let saved = FavoriteItem::Planet(1)
        .into_active_model(1)
        .insert(&test.db)
        .await?;

    assert_eq!(saved.item_type, ItemType::Planet);
    assert_eq!(FavoriteItem::from(&saved), FavoriteItem::Planet(1));

    Ok(())
}

/// Tests the opt-in existence check for the referenced item.
///
/// Expected: true for the stored planet, false for a missing one and for a film with the
/// same id
#[tokio::test]
async fn checks_referenced_item_exists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_planet(1)
        .build()
        .await?;

    assert!(FavoriteItem::Planet(1).exists(&test.db).await?);
    assert!(!FavoriteItem::Planet(2).exists(&test.db).await?);
    assert!(!FavoriteItem::Film(1).exists(&test.db).await?);

    Ok(())
}
