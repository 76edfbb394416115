use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{drop_index, pair_index, restrict_fk},
    m20241001_000001_create_planet_table::Planet,
    m20241001_000005_create_person_table::Person,
    m20241001_000009_create_character_table::Character,
    m20241001_000010_create_film_table::Film,
    m20241001_000011_create_starship_table::Starship,
    m20241001_000012_create_vehicle_table::Vehicle,
    m20241001_000013_create_species_table::Species,
};

static FK_FILM_DIRECTOR_FILM_ID: &str = "fk-film_director-film_id";
static FK_FILM_DIRECTOR_PERSON_ID: &str = "fk-film_director-person_id";
static IDX_FILM_DIRECTOR_UNIQUE: &str = "idx-film_director-unique";
static FK_FILM_PRODUCER_FILM_ID: &str = "fk-film_producer-film_id";
static FK_FILM_PRODUCER_PERSON_ID: &str = "fk-film_producer-person_id";
static IDX_FILM_PRODUCER_UNIQUE: &str = "idx-film_producer-unique";
static FK_FILM_CHARACTER_FILM_ID: &str = "fk-film_character-film_id";
static FK_FILM_CHARACTER_CHARACTER_ID: &str = "fk-film_character-character_id";
static IDX_FILM_CHARACTER_UNIQUE: &str = "idx-film_character-unique";
static FK_FILM_PLANET_FILM_ID: &str = "fk-film_planet-film_id";
static FK_FILM_PLANET_PLANET_ID: &str = "fk-film_planet-planet_id";
static IDX_FILM_PLANET_UNIQUE: &str = "idx-film_planet-unique";
static FK_FILM_SPECIES_FILM_ID: &str = "fk-film_species-film_id";
static FK_FILM_SPECIES_SPECIES_ID: &str = "fk-film_species-species_id";
static IDX_FILM_SPECIES_UNIQUE: &str = "idx-film_species-unique";
static FK_FILM_STARSHIP_FILM_ID: &str = "fk-film_starship-film_id";
static FK_FILM_STARSHIP_STARSHIP_ID: &str = "fk-film_starship-starship_id";
static IDX_FILM_STARSHIP_UNIQUE: &str = "idx-film_starship-unique";
static FK_FILM_VEHICLE_FILM_ID: &str = "fk-film_vehicle-film_id";
static FK_FILM_VEHICLE_VEHICLE_ID: &str = "fk-film_vehicle-vehicle_id";
static IDX_FILM_VEHICLE_UNIQUE: &str = "idx-film_vehicle-unique";

/// Links each film to its credits and to the characters, planets, species and craft
/// appearing in it.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmDirector::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmDirector::Id))
                    .col(integer(FilmDirector::FilmId))
                    .col(integer(FilmDirector::PersonId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_DIRECTOR_FILM_ID,
                        FilmDirector::Table,
                        FilmDirector::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_DIRECTOR_PERSON_ID,
                        FilmDirector::Table,
                        FilmDirector::PersonId,
                        Person::Table,
                        Person::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_DIRECTOR_UNIQUE,
                FilmDirector::Table,
                FilmDirector::FilmId,
                FilmDirector::PersonId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmProducer::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmProducer::Id))
                    .col(integer(FilmProducer::FilmId))
                    .col(integer(FilmProducer::PersonId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_PRODUCER_FILM_ID,
                        FilmProducer::Table,
                        FilmProducer::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_PRODUCER_PERSON_ID,
                        FilmProducer::Table,
                        FilmProducer::PersonId,
                        Person::Table,
                        Person::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_PRODUCER_UNIQUE,
                FilmProducer::Table,
                FilmProducer::FilmId,
                FilmProducer::PersonId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmCharacter::Id))
                    .col(integer(FilmCharacter::FilmId))
                    .col(integer(FilmCharacter::CharacterId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_CHARACTER_FILM_ID,
                        FilmCharacter::Table,
                        FilmCharacter::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_CHARACTER_CHARACTER_ID,
                        FilmCharacter::Table,
                        FilmCharacter::CharacterId,
                        Character::Table,
                        Character::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_CHARACTER_UNIQUE,
                FilmCharacter::Table,
                FilmCharacter::FilmId,
                FilmCharacter::CharacterId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmPlanet::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmPlanet::Id))
                    .col(integer(FilmPlanet::FilmId))
                    .col(integer(FilmPlanet::PlanetId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_PLANET_FILM_ID,
                        FilmPlanet::Table,
                        FilmPlanet::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_PLANET_PLANET_ID,
                        FilmPlanet::Table,
                        FilmPlanet::PlanetId,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_PLANET_UNIQUE,
                FilmPlanet::Table,
                FilmPlanet::FilmId,
                FilmPlanet::PlanetId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmSpecies::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmSpecies::Id))
                    .col(integer(FilmSpecies::FilmId))
                    .col(integer(FilmSpecies::SpeciesId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_SPECIES_FILM_ID,
                        FilmSpecies::Table,
                        FilmSpecies::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_SPECIES_SPECIES_ID,
                        FilmSpecies::Table,
                        FilmSpecies::SpeciesId,
                        Species::Table,
                        Species::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_SPECIES_UNIQUE,
                FilmSpecies::Table,
                FilmSpecies::FilmId,
                FilmSpecies::SpeciesId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmStarship::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmStarship::Id))
                    .col(integer(FilmStarship::FilmId))
                    .col(integer(FilmStarship::StarshipId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_STARSHIP_FILM_ID,
                        FilmStarship::Table,
                        FilmStarship::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_STARSHIP_STARSHIP_ID,
                        FilmStarship::Table,
                        FilmStarship::StarshipId,
                        Starship::Table,
                        Starship::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_STARSHIP_UNIQUE,
                FilmStarship::Table,
                FilmStarship::FilmId,
                FilmStarship::StarshipId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmVehicle::Id))
                    .col(integer(FilmVehicle::FilmId))
                    .col(integer(FilmVehicle::VehicleId))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_VEHICLE_FILM_ID,
                        FilmVehicle::Table,
                        FilmVehicle::FilmId,
                        Film::Table,
                        Film::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_FILM_VEHICLE_VEHICLE_ID,
                        FilmVehicle::Table,
                        FilmVehicle::VehicleId,
                        Vehicle::Table,
                        Vehicle::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_FILM_VEHICLE_UNIQUE,
                FilmVehicle::Table,
                FilmVehicle::FilmId,
                FilmVehicle::VehicleId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(drop_index(IDX_FILM_VEHICLE_UNIQUE, FilmVehicle::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmVehicle::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_STARSHIP_UNIQUE, FilmStarship::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmStarship::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_SPECIES_UNIQUE, FilmSpecies::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmSpecies::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_PLANET_UNIQUE, FilmPlanet::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmPlanet::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_CHARACTER_UNIQUE, FilmCharacter::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmCharacter::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_PRODUCER_UNIQUE, FilmProducer::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmProducer::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_FILM_DIRECTOR_UNIQUE, FilmDirector::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(FilmDirector::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FilmDirector {
    Table,
    Id,
    FilmId,
    PersonId,
}

#[derive(DeriveIden)]
enum FilmProducer {
    Table,
    Id,
    FilmId,
    PersonId,
}

#[derive(DeriveIden)]
enum FilmCharacter {
    Table,
    Id,
    FilmId,
    CharacterId,
}

#[derive(DeriveIden)]
enum FilmPlanet {
    Table,
    Id,
    FilmId,
    PlanetId,
}

#[derive(DeriveIden)]
enum FilmSpecies {
    Table,
    Id,
    FilmId,
    SpeciesId,
}

#[derive(DeriveIden)]
enum FilmStarship {
    Table,
    Id,
    FilmId,
    StarshipId,
}

#[derive(DeriveIden)]
enum FilmVehicle {
    Table,
    Id,
    FilmId,
    VehicleId,
}
