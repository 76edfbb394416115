//! Storage-level constraint tests against the fully migrated schema.
//!
//! Rows are generated from catalog metadata so every table and required column is covered.

use entity::prelude::*;
use holocron::{error::Error, schema::catalog};
use holocron_test_utils::prelude::*;
use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Iterable, ModelTrait,
    SqlErr, Value,
};

use crate::util::{insert_row, insert_row_with, insert_row_with_null};

/// Insert one valid row into every table, parents first.
async fn populate(test: &TestContext) -> Result<(), DbErr> {
    let ordered = catalog()
        .dependency_order()
        .expect("catalog has no cycles");

    for table in ordered {
        test.db.execute(&insert_row(table, 1)).await?;
    }

    Ok(())
}

/// Assert that `result` failed with a unique constraint violation.
fn assert_unique_violation<T: std::fmt::Debug>(result: Result<T, TestError>, what: &str) {
    let err = match result {
        Err(TestError::DbErr(err)) => err,
        Ok(row) => panic!("duplicate {what} was accepted: {row:?}"),
    };
    assert!(
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        "{what}: {err}"
    );
}

/// Tests that a row with every required column set can be stored in every table.
///
/// Expected: Ok for all 29 tables
#[tokio::test]
async fn accepts_complete_row_in_every_table() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    populate(&test).await?;

    assert_eq!(Planet::find().all(&test.db).await?.len(), 1);
    assert_eq!(SpeciesColor::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Tests that storing NULL in any required column is rejected, including tables whose only
/// required column is the one set to NULL.
///
/// Expected: NOT NULL constraint violation for each required column of each table
#[tokio::test]
async fn rejects_row_missing_any_required_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    populate(&test).await?;

    for table in catalog().tables() {
        for column in table.required_columns() {
            let result = test.db.execute(&insert_row_with_null(table, column.name, 2)).await;

            let err = result.expect_err(&format!("{}.{} accepted NULL", table.name, column.name));
            assert!(
                err.to_string().contains("NOT NULL constraint failed"),
                "{}.{}: {err}",
                table.name,
                column.name
            );
        }
    }

    Ok(())
}

/// Tests that NULL is rejected on a table whose only required column is the one set to NULL.
///
/// Expected: NOT NULL constraint violation for color.name
#[tokio::test]
async fn rejects_null_in_sole_required_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let color = catalog().table("color").unwrap();
    assert_eq!(color.required_columns().count(), 1);

    let err = test
        .db
        .execute(&insert_row_with_null(color, "name", 1))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("NOT NULL constraint failed"), "{err}");

    Ok(())
}

/// Tests that optional columns may be left unset.
///
/// Expected: Ok with a character that has no homeworld, birth year or colors
#[tokio::test]
async fn accepts_character_without_optional_columns() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let character = test.world().insert_mock_character(1, None).await?;

    assert_eq!(character.homeworld, None);
    assert_eq!(character.eye_color_id, None);

    Ok(())
}

/// Tests that a second user with the same email is rejected.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_user_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;

    let existing = factory::mock_user_model(1);
    let result = User::insert(entity::user::ActiveModel {
        email: ActiveValue::Set(existing.email),
        hashed_password: ActiveValue::Set("other".to_string()),
        name: ActiveValue::Set("Other User".to_string()),
        ..Default::default()
    })
    .exec(&test.db)
    .await;

    let err = Error::from(result.unwrap_err());
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that color names and climate/terrain types are unique.
///
/// Expected: Err classified as a unique constraint violation on the second insert of each
#[tokio::test]
async fn rejects_duplicate_natural_keys() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    test.world().insert_mock_color(1, "blue").await?;
    test.world().insert_mock_climate("arid").await?;
    test.world().insert_mock_terrain("desert").await?;

    assert_unique_violation(test.world().insert_mock_color(2, "blue").await, "color.name");
    assert_unique_violation(test.world().insert_mock_climate("arid").await, "climate.type");
    assert_unique_violation(test.world().insert_mock_terrain("desert").await, "terrain.type");

    Ok(())
}

/// Tests that the same pair cannot be linked twice through an association table.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_association_pair() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_film(1).build().await?;
    test.media().insert_mock_person(1).await?;
    test.media().insert_film_director(1, 1).await?;

    let result = test.media().insert_film_director(1, 1).await;

    assert_unique_violation(result, "film_director pair");

    Ok(())
}

/// Tests that one species may carry the same color for different traits.
///
/// Expected: Ok for EYE and HAIR, unique constraint violation for a repeated EYE
#[tokio::test]
async fn species_color_is_unique_per_trait() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_species(1, 1).build().await?;
    test.world().insert_mock_color(1, "brown").await?;

    let link = |color_type| entity::species_color::ActiveModel {
        species_id: ActiveValue::Set(1),
        color_id: ActiveValue::Set(1),
        color_type: ActiveValue::Set(color_type),
        ..Default::default()
    };

    SpeciesColor::insert(link(ColorType::Eye)).exec(&test.db).await?;
    SpeciesColor::insert(link(ColorType::Hair)).exec(&test.db).await?;
    let result = SpeciesColor::insert(link(ColorType::Eye))
        .exec(&test.db)
        .await
        .map(|_| ())
        .map_err(TestError::from);

    assert_unique_violation(result, "species_color triple");

    Ok(())
}

/// Tests that an association row pointing at a missing parent is rejected.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn rejects_association_to_missing_parent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_film(1).build().await?;

    let result = test.media().insert_film_director(1, 999).await;

    let Err(TestError::DbErr(err)) = result else {
        panic!("dangling person_id was accepted");
    };
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a favorite may reference an item id that does not exist.
///
/// Expected: Ok, since favorite.item_id carries no foreign key
#[tokio::test]
async fn accepts_favorite_of_missing_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;

    let favorite = test
        .user()
        .insert_favorite(1, ItemType::Starship, 12345)
        .await?;

    assert_eq!(favorite.item_id, 12345);
    assert_eq!(favorite.item_type, ItemType::Starship);

    Ok(())
}

/// Tests that a favorite's owner must exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_favorite_of_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let result = test.user().insert_favorite(42, ItemType::Film, 1).await;

    let Err(TestError::DbErr(err)) = result else {
        panic!("favorite of a missing user was accepted");
    };
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that enum columns reject literals outside their value set.
///
/// Expected: CHECK constraint failure for favorite.type, character.gender and
/// species_color.color_type
#[tokio::test]
async fn rejects_unknown_enum_literals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    populate(&test).await?;

    for (table, column) in [
        ("favorite", "type"),
        ("character", "gender"),
        ("species_color", "color_type"),
    ] {
        let table_def = catalog().table(table).unwrap();
        let stmt = insert_row_with(table_def, column, Value::from("robot"), 3);

        let err = test.db.execute(&stmt).await.unwrap_err();
        assert!(
            err.to_string().contains("CHECK constraint failed"),
            "{table}.{column}: {err}"
        );
    }

    Ok(())
}

/// Tests that every declared literal of every enum column is accepted.
///
/// Expected: Ok for each item type, gender and color type
#[tokio::test]
async fn accepts_every_enum_literal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_species(1, 1)
        .build()
        .await?;
    test.world().insert_mock_color(1, "green").await?;

    for (id, item_type) in ItemType::iter().enumerate() {
        test.user().insert_favorite(1, item_type, id as i32).await?;
    }

    for (id, gender) in Gender::iter().enumerate() {
        let mut character = factory::mock_character_model(id as i32 + 1, None);
        character.gender = gender;
        Character::insert(character.into_active_model())
            .exec(&test.db)
            .await?;
    }

    for color_type in ColorType::iter() {
        SpeciesColor::insert(entity::species_color::ActiveModel {
            species_id: ActiveValue::Set(1),
            color_id: ActiveValue::Set(1),
            color_type: ActiveValue::Set(color_type),
            ..Default::default()
        })
        .exec(&test.db)
        .await?;
    }

    Ok(())
}

/// Tests that a parent row cannot be deleted while children reference it.
///
/// Expected: Err on deleting Tatooine while Luke lives there
#[tokio::test]
async fn restricts_deleting_referenced_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1, Some(1))
        .build()
        .await?;

    let planet = Planet::find_by_id(1).one(&test.db).await?.unwrap();
    let result = planet.clone().delete(&test.db).await;

    assert!(result.is_err());
    assert!(Planet::find_by_id(planet.id).one(&test.db).await?.is_some());

    Ok(())
}
