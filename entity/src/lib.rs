//! SeaORM entities for the holocron catalog database.
//!
//! One module per table. Association tables realizing the many-to-many links between
//! catalog entities carry a surrogate `id` plus the two foreign keys they connect.

pub mod prelude;

pub mod character;
pub mod climate;
pub mod color;
pub mod favorite;
pub mod film;
pub mod film_character;
pub mod film_director;
pub mod film_planet;
pub mod film_producer;
pub mod film_species;
pub mod film_starship;
pub mod film_vehicle;
pub mod manufacturer;
pub mod person;
pub mod planet;
pub mod planet_climate;
pub mod planet_terrain;
pub mod resident;
pub mod sea_orm_active_enums;
pub mod species;
pub mod species_color;
pub mod species_individual;
pub mod starship;
pub mod starship_manufacturer;
pub mod starship_pilot;
pub mod terrain;
pub mod user;
pub mod vehicle;
pub mod vehicle_manufacturer;
pub mod vehicle_pilot;
