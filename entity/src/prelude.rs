pub use super::character::Entity as Character;
pub use super::climate::Entity as Climate;
pub use super::color::Entity as Color;
pub use super::favorite::Entity as Favorite;
pub use super::film::Entity as Film;
pub use super::film_character::Entity as FilmCharacter;
pub use super::film_director::Entity as FilmDirector;
pub use super::film_planet::Entity as FilmPlanet;
pub use super::film_producer::Entity as FilmProducer;
pub use super::film_species::Entity as FilmSpecies;
pub use super::film_starship::Entity as FilmStarship;
pub use super::film_vehicle::Entity as FilmVehicle;
pub use super::manufacturer::Entity as Manufacturer;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::planet_climate::Entity as PlanetClimate;
pub use super::planet_terrain::Entity as PlanetTerrain;
pub use super::resident::Entity as Resident;
pub use super::species::Entity as Species;
pub use super::species_color::Entity as SpeciesColor;
pub use super::species_individual::Entity as SpeciesIndividual;
pub use super::starship::Entity as Starship;
pub use super::starship_manufacturer::Entity as StarshipManufacturer;
pub use super::starship_pilot::Entity as StarshipPilot;
pub use super::terrain::Entity as Terrain;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_manufacturer::Entity as VehicleManufacturer;
pub use super::vehicle_pilot::Entity as VehiclePilot;

pub use super::sea_orm_active_enums::{ColorType, Gender, ItemType};
