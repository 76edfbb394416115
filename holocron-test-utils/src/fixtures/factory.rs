//! Factory functions for mock catalog models.
//!
//! Values are taken from the SWAPI records for Tatooine, Luke Skywalker, A New Hope and
//! friends. These are in-memory models; nothing is written to a database.

use chrono::{NaiveDate, NaiveDateTime};
use entity::prelude::{Gender, ItemType};

use crate::model::{
    CharacterModel, ColorModel, FavoriteModel, FilmModel, ManufacturerModel, PersonModel,
    PlanetModel, SpeciesModel, StarshipModel, UserModel, VehicleModel,
};

/// Timestamp used for every `created_at`/`edited_at` column.
pub fn mock_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 12, 9)
        .and_then(|d| d.and_hms_opt(13, 50, 51))
        .unwrap()
}

fn swapi_url(resource: &str, id: i32) -> String {
    format!("https://swapi.dev/api/{resource}/{id}/")
}

pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: "Tatooine".to_string(),
        diameter: Some(10465),
        rotation_period: 23,
        orbital_period: 304,
        gravity: 1.0,
        population: Some(200000),
        surface_water: Some(1.0),
        url: swapi_url("planets", planet_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_color_model(color_id: i32, name: &str) -> ColorModel {
    ColorModel {
        id: color_id,
        name: name.to_string(),
    }
}

/// Luke Skywalker, with no colors set.
pub fn mock_character_model(character_id: i32, homeworld_id: Option<i32>) -> CharacterModel {
    CharacterModel {
        id: character_id,
        homeworld: homeworld_id,
        eye_color_id: None,
        hair_color_id: None,
        skin_color_id: None,
        name: "Luke Skywalker".to_string(),
        birth_year: Some("19BBY".to_string()),
        gender: Gender::Male,
        height: 172.0,
        mass: 77.0,
        url: swapi_url("people", character_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_species_model(species_id: i32, homeworld_id: i32) -> SpeciesModel {
    SpeciesModel {
        id: species_id,
        name: "Human".to_string(),
        classification: "mammal".to_string(),
        designation: "sentient".to_string(),
        average_height: Some(180.0),
        average_lifespan: Some(120),
        language: "Galactic Basic".to_string(),
        homeworld: homeworld_id,
        url: swapi_url("species", species_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_film_model(film_id: i32) -> FilmModel {
    FilmModel {
        id: film_id,
        title: "A New Hope".to_string(),
        episode_id: 4,
        opening_crawl: "It is a period of civil war.".to_string(),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25).and_then(|d| d.and_hms_opt(0, 0, 0)),
        url: swapi_url("films", film_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_starship_model(starship_id: i32) -> StarshipModel {
    StarshipModel {
        id: starship_id,
        name: "X-wing".to_string(),
        model: "T-65 X-wing".to_string(),
        starship_class: "Starfighter".to_string(),
        cost_in_credits: Some(149999.0),
        length: 12.5,
        crew: 1,
        passengers: 0,
        max_atmosphering_speed: Some(1050.0),
        hyperdrive_rating: 1.0,
        mglt: "100".to_string(),
        cargo_capacity: 110.0,
        consumables: "1 week".to_string(),
        url: swapi_url("starships", starship_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_vehicle_model(vehicle_id: i32) -> VehicleModel {
    VehicleModel {
        id: vehicle_id,
        name: "Snowspeeder".to_string(),
        model: "t-47 airspeeder".to_string(),
        vehicle_class: "airspeeder".to_string(),
        length: 4.5,
        cost_in_credits: None,
        crew: 2,
        passengers: 0,
        max_atmosphering_speed: Some(650.0),
        cargo_capacity: 10.0,
        consumables: "none".to_string(),
        url: swapi_url("vehicles", vehicle_id),
        created_at: mock_timestamp(),
        edited_at: mock_timestamp(),
    }
}

pub fn mock_person_model(person_id: i32) -> PersonModel {
    PersonModel {
        id: person_id,
        name: "George Lucas".to_string(),
    }
}

pub fn mock_manufacturer_model(manufacturer_id: i32) -> ManufacturerModel {
    ManufacturerModel {
        id: manufacturer_id,
        name: "Incom Corporation".to_string(),
    }
}

/// User with a unique email derived from its id.
pub fn mock_user_model(user_id: i32) -> UserModel {
    UserModel {
        id: user_id,
        email: format!("user{user_id}@example.com"),
        hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        name: "Test User".to_string(),
        created_at: mock_timestamp(),
        updated_at: mock_timestamp(),
    }
}

pub fn mock_favorite_model(user_id: i32, item_type: ItemType, item_id: i32) -> FavoriteModel {
    FavoriteModel {
        id: 1,
        user_id,
        item_id,
        item_type,
    }
}
