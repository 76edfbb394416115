//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main holocron crate so fixtures and tests read the same.

pub type UserModel = entity::user::Model;

pub type FavoriteModel = entity::favorite::Model;

pub type PlanetModel = entity::planet::Model;

pub type ColorModel = entity::color::Model;

pub type ClimateModel = entity::climate::Model;

pub type TerrainModel = entity::terrain::Model;

pub type CharacterModel = entity::character::Model;

pub type SpeciesModel = entity::species::Model;

pub type FilmModel = entity::film::Model;

pub type StarshipModel = entity::starship::Model;

pub type VehicleModel = entity::vehicle::Model;

pub type PersonModel = entity::person::Model;

pub type ManufacturerModel = entity::manufacturer::Model;
