pub use sea_orm_migration::prelude::*;

mod common;
mod m20241001_000001_create_planet_table;
mod m20241001_000002_create_color_table;
mod m20241001_000003_create_climate_table;
mod m20241001_000004_create_terrain_table;
mod m20241001_000005_create_person_table;
mod m20241001_000006_create_manufacturer_table;
mod m20241001_000007_create_user_table;
mod m20241001_000008_create_favorite_table;
mod m20241001_000009_create_character_table;
mod m20241001_000010_create_film_table;
mod m20241001_000011_create_starship_table;
mod m20241001_000012_create_vehicle_table;
mod m20241001_000013_create_species_table;
mod m20241001_000014_create_film_association_tables;
mod m20241001_000015_create_planet_association_tables;
mod m20241001_000016_create_species_association_tables;
mod m20241001_000017_create_craft_association_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_planet_table::Migration),
            Box::new(m20241001_000002_create_color_table::Migration),
            Box::new(m20241001_000003_create_climate_table::Migration),
            Box::new(m20241001_000004_create_terrain_table::Migration),
            Box::new(m20241001_000005_create_person_table::Migration),
            Box::new(m20241001_000006_create_manufacturer_table::Migration),
            Box::new(m20241001_000007_create_user_table::Migration),
            Box::new(m20241001_000008_create_favorite_table::Migration),
            Box::new(m20241001_000009_create_character_table::Migration),
            Box::new(m20241001_000010_create_film_table::Migration),
            Box::new(m20241001_000011_create_starship_table::Migration),
            Box::new(m20241001_000012_create_vehicle_table::Migration),
            Box::new(m20241001_000013_create_species_table::Migration),
            Box::new(m20241001_000014_create_film_association_tables::Migration),
            Box::new(m20241001_000015_create_planet_association_tables::Migration),
            Box::new(m20241001_000016_create_species_association_tables::Migration),
            Box::new(m20241001_000017_create_craft_association_tables::Migration),
        ]
    }
}
