//! Tests navigating relations between catalog entities through the generated entities.

use entity::prelude::*;
use holocron_test_utils::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel, ModelTrait};

/// Tests the Tatooine and Luke Skywalker scenario across homeworld and resident links.
///
/// Expected: Luke's homeworld is Tatooine and Tatooine lists Luke both as a native and a
/// resident
#[tokio::test]
async fn navigates_homeworld_and_residents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1, Some(1))
        .build()
        .await?;
    test.world().insert_resident(1, 1).await?;

    let luke = Character::find_by_id(1).one(&test.db).await?.unwrap();
    let homeworld = luke.find_related(Planet).one(&test.db).await?.unwrap();
    assert_eq!(homeworld.name, "Tatooine");

    let natives = homeworld.find_related(Character).all(&test.db).await?;
    assert_eq!(natives.len(), 1);
    assert_eq!(natives[0].name, "Luke Skywalker");

    let residents = homeworld
        .find_linked(entity::planet::PlanetToResident)
        .all(&test.db)
        .await?;
    assert_eq!(residents, natives);

    let residences = luke
        .find_linked(entity::character::CharacterToResidence)
        .all(&test.db)
        .await?;
    assert_eq!(residences.len(), 1);

    Ok(())
}

/// Tests that directors and producers of a film are kept apart.
///
/// Expected: one director, two producers
#[tokio::test]
async fn separates_directors_from_producers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_film(1).build().await?;
    for person_id in 1..=3 {
        test.media().insert_mock_person(person_id).await?;
    }
    test.media().insert_film_director(1, 1).await?;
    for person_id in [2, 3] {
        FilmProducer::insert(entity::film_producer::ActiveModel {
            film_id: ActiveValue::Set(1),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        })
        .exec(&test.db)
        .await?;
    }

    let film = Film::find_by_id(1).one(&test.db).await?.unwrap();
    let directors = film
        .find_linked(entity::film::FilmToDirector)
        .all(&test.db)
        .await?;
    let producers = film
        .find_linked(entity::film::FilmToProducer)
        .all(&test.db)
        .await?;

    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].id, 1);
    assert_eq!(producers.len(), 2);

    Ok(())
}

/// Tests many-to-many navigation through a pilot association in both directions.
///
/// Expected: the starship lists its pilot and the pilot lists the starship
#[tokio::test]
async fn navigates_starship_pilots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1, None)
        .build()
        .await?;
    test.media().insert_mock_starship(1).await?;
    test.media().insert_starship_pilot(1, 1).await?;

    let starship = Starship::find_by_id(1).one(&test.db).await?.unwrap();
    let pilots = starship.find_related(Character).all(&test.db).await?;
    assert_eq!(pilots.len(), 1);

    let ships = pilots[0].find_related(Starship).all(&test.db).await?;
    assert_eq!(ships, vec![starship]);

    Ok(())
}

/// Tests that a film's cast is reachable through film_character.
///
/// Expected: the film lists the character and the character lists the film
#[tokio::test]
async fn navigates_film_cast() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_film(1)
        .with_mock_character(1, Some(1))
        .build()
        .await?;
    test.media().insert_film_character(1, 1).await?;

    let film = Film::find_by_id(1).one(&test.db).await?.unwrap();
    let cast = film.find_related(Character).all(&test.db).await?;
    assert_eq!(cast.len(), 1);

    let films = cast[0].find_related(Film).all(&test.db).await?;
    assert_eq!(films, vec![film]);

    Ok(())
}

/// Tests that each color trait of a character resolves independently.
///
/// Expected: eye color blue, hair color blond, no skin color
#[tokio::test]
async fn resolves_character_colors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1, None)
        .build()
        .await?;
    let blue = test.world().insert_mock_color(1, "blue").await?;
    let blond = test.world().insert_mock_color(2, "blond").await?;

    let luke = Character::find_by_id(1).one(&test.db).await?.unwrap();
    let mut active = luke.into_active_model();
    active.eye_color_id = ActiveValue::Set(Some(blue.id));
    active.hair_color_id = ActiveValue::Set(Some(blond.id));
    let luke = active.update(&test.db).await?;

    let eye = luke
        .find_linked(entity::character::CharacterToEyeColor)
        .one(&test.db)
        .await?;
    let hair = luke
        .find_linked(entity::character::CharacterToHairColor)
        .one(&test.db)
        .await?;
    let skin = luke
        .find_linked(entity::character::CharacterToSkinColor)
        .one(&test.db)
        .await?;

    assert_eq!(eye, Some(blue));
    assert_eq!(hair, Some(blond));
    assert_eq!(skin, None);

    Ok(())
}

/// Tests that a user's favorites are reachable from the user.
///
/// Expected: two favorites of different item types
#[tokio::test]
async fn lists_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;
    test.user().insert_favorite(1, ItemType::Planet, 1).await?;
    test.user().insert_favorite(1, ItemType::Film, 4).await?;

    let user = User::find_by_id(1).one(&test.db).await?.unwrap();
    let favorites = user.find_related(Favorite).all(&test.db).await?;

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].item_type, ItemType::Planet);
    assert_eq!(favorites[1].item_type, ItemType::Film);

    Ok(())
}
