use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{drop_index, pair_index, restrict_fk},
    m20241001_000001_create_planet_table::Planet,
    m20241001_000003_create_climate_table::Climate,
    m20241001_000004_create_terrain_table::Terrain,
    m20241001_000009_create_character_table::Character,
};

static FK_RESIDENT_PLANET_ID: &str = "fk-resident-planet_id";
static FK_RESIDENT_CHARACTER_ID: &str = "fk-resident-character_id";
static IDX_RESIDENT_UNIQUE: &str = "idx-resident-unique";
static FK_PLANET_CLIMATE_PLANET_ID: &str = "fk-planet_climate-planet_id";
static FK_PLANET_CLIMATE_CLIMATE_ID: &str = "fk-planet_climate-climate_id";
static IDX_PLANET_CLIMATE_UNIQUE: &str = "idx-planet_climate-unique";
static FK_PLANET_TERRAIN_PLANET_ID: &str = "fk-planet_terrain-planet_id";
static FK_PLANET_TERRAIN_TERRAIN_ID: &str = "fk-planet_terrain-terrain_id";
static IDX_PLANET_TERRAIN_UNIQUE: &str = "idx-planet_terrain-unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resident::Table)
                    .if_not_exists()
                    .col(pk_auto(Resident::Id))
                    .col(integer(Resident::PlanetId))
                    .col(integer(Resident::CharacterId))
                    .foreign_key(&mut restrict_fk(
                        FK_RESIDENT_PLANET_ID,
                        Resident::Table,
                        Resident::PlanetId,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_RESIDENT_CHARACTER_ID,
                        Resident::Table,
                        Resident::CharacterId,
                        Character::Table,
                        Character::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_RESIDENT_UNIQUE,
                Resident::Table,
                Resident::PlanetId,
                Resident::CharacterId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanetClimate::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetClimate::Id))
                    .col(integer(PlanetClimate::PlanetId))
                    .col(integer(PlanetClimate::ClimateId))
                    .foreign_key(&mut restrict_fk(
                        FK_PLANET_CLIMATE_PLANET_ID,
                        PlanetClimate::Table,
                        PlanetClimate::PlanetId,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_PLANET_CLIMATE_CLIMATE_ID,
                        PlanetClimate::Table,
                        PlanetClimate::ClimateId,
                        Climate::Table,
                        Climate::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_PLANET_CLIMATE_UNIQUE,
                PlanetClimate::Table,
                PlanetClimate::PlanetId,
                PlanetClimate::ClimateId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanetTerrain::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetTerrain::Id))
                    .col(integer(PlanetTerrain::PlanetId))
                    .col(integer(PlanetTerrain::TerrainId))
                    .foreign_key(&mut restrict_fk(
                        FK_PLANET_TERRAIN_PLANET_ID,
                        PlanetTerrain::Table,
                        PlanetTerrain::PlanetId,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_PLANET_TERRAIN_TERRAIN_ID,
                        PlanetTerrain::Table,
                        PlanetTerrain::TerrainId,
                        Terrain::Table,
                        Terrain::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_PLANET_TERRAIN_UNIQUE,
                PlanetTerrain::Table,
                PlanetTerrain::PlanetId,
                PlanetTerrain::TerrainId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(drop_index(IDX_PLANET_TERRAIN_UNIQUE, PlanetTerrain::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetTerrain::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_PLANET_CLIMATE_UNIQUE, PlanetClimate::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetClimate::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_RESIDENT_UNIQUE, Resident::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(Resident::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Resident {
    Table,
    Id,
    PlanetId,
    CharacterId,
}

#[derive(DeriveIden)]
enum PlanetClimate {
    Table,
    Id,
    PlanetId,
    ClimateId,
}

#[derive(DeriveIden)]
enum PlanetTerrain {
    Table,
    Id,
    PlanetId,
    TerrainId,
}
