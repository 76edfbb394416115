use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{drop_index, pair_index, restrict_fk},
    m20241001_000006_create_manufacturer_table::Manufacturer,
    m20241001_000009_create_character_table::Character,
    m20241001_000011_create_starship_table::Starship,
    m20241001_000012_create_vehicle_table::Vehicle,
};

static FK_STARSHIP_PILOT_STARSHIP_ID: &str = "fk-starship_pilot-starship_id";
static FK_STARSHIP_PILOT_CHARACTER_ID: &str = "fk-starship_pilot-character_id";
static IDX_STARSHIP_PILOT_UNIQUE: &str = "idx-starship_pilot-unique";
static FK_VEHICLE_PILOT_VEHICLE_ID: &str = "fk-vehicle_pilot-vehicle_id";
static FK_VEHICLE_PILOT_CHARACTER_ID: &str = "fk-vehicle_pilot-character_id";
static IDX_VEHICLE_PILOT_UNIQUE: &str = "idx-vehicle_pilot-unique";
static FK_STARSHIP_MANUFACTURER_STARSHIP_ID: &str = "fk-starship_manufacturer-starship_id";
static FK_STARSHIP_MANUFACTURER_MANUFACTURER_ID: &str = "fk-starship_manufacturer-manufacturer_id";
static IDX_STARSHIP_MANUFACTURER_UNIQUE: &str = "idx-starship_manufacturer-unique";
static FK_VEHICLE_MANUFACTURER_VEHICLE_ID: &str = "fk-vehicle_manufacturer-vehicle_id";
static FK_VEHICLE_MANUFACTURER_MANUFACTURER_ID: &str = "fk-vehicle_manufacturer-manufacturer_id";
static IDX_VEHICLE_MANUFACTURER_UNIQUE: &str = "idx-vehicle_manufacturer-unique";

/// Pilots and manufacturers of starships and vehicles.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarshipPilot::Table)
                    .if_not_exists()
                    .col(pk_auto(StarshipPilot::Id))
                    .col(integer(StarshipPilot::StarshipId))
                    .col(integer(StarshipPilot::CharacterId))
                    .foreign_key(&mut restrict_fk(
                        FK_STARSHIP_PILOT_STARSHIP_ID,
                        StarshipPilot::Table,
                        StarshipPilot::StarshipId,
                        Starship::Table,
                        Starship::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_STARSHIP_PILOT_CHARACTER_ID,
                        StarshipPilot::Table,
                        StarshipPilot::CharacterId,
                        Character::Table,
                        Character::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_STARSHIP_PILOT_UNIQUE,
                StarshipPilot::Table,
                StarshipPilot::StarshipId,
                StarshipPilot::CharacterId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VehiclePilot::Table)
                    .if_not_exists()
                    .col(pk_auto(VehiclePilot::Id))
                    .col(integer(VehiclePilot::VehicleId))
                    .col(integer(VehiclePilot::CharacterId))
                    .foreign_key(&mut restrict_fk(
                        FK_VEHICLE_PILOT_VEHICLE_ID,
                        VehiclePilot::Table,
                        VehiclePilot::VehicleId,
                        Vehicle::Table,
                        Vehicle::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_VEHICLE_PILOT_CHARACTER_ID,
                        VehiclePilot::Table,
                        VehiclePilot::CharacterId,
                        Character::Table,
                        Character::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_VEHICLE_PILOT_UNIQUE,
                VehiclePilot::Table,
                VehiclePilot::VehicleId,
                VehiclePilot::CharacterId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StarshipManufacturer::Table)
                    .if_not_exists()
                    .col(pk_auto(StarshipManufacturer::Id))
                    .col(integer(StarshipManufacturer::StarshipId))
                    .col(integer(StarshipManufacturer::ManufacturerId))
                    .foreign_key(&mut restrict_fk(
                        FK_STARSHIP_MANUFACTURER_STARSHIP_ID,
                        StarshipManufacturer::Table,
                        StarshipManufacturer::StarshipId,
                        Starship::Table,
                        Starship::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_STARSHIP_MANUFACTURER_MANUFACTURER_ID,
                        StarshipManufacturer::Table,
                        StarshipManufacturer::ManufacturerId,
                        Manufacturer::Table,
                        Manufacturer::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_STARSHIP_MANUFACTURER_UNIQUE,
                StarshipManufacturer::Table,
                StarshipManufacturer::StarshipId,
                StarshipManufacturer::ManufacturerId,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VehicleManufacturer::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleManufacturer::Id))
                    .col(integer(VehicleManufacturer::VehicleId))
                    .col(integer(VehicleManufacturer::ManufacturerId))
                    .foreign_key(&mut restrict_fk(
                        FK_VEHICLE_MANUFACTURER_VEHICLE_ID,
                        VehicleManufacturer::Table,
                        VehicleManufacturer::VehicleId,
                        Vehicle::Table,
                        Vehicle::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_VEHICLE_MANUFACTURER_MANUFACTURER_ID,
                        VehicleManufacturer::Table,
                        VehicleManufacturer::ManufacturerId,
                        Manufacturer::Table,
                        Manufacturer::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_VEHICLE_MANUFACTURER_UNIQUE,
                VehicleManufacturer::Table,
                VehicleManufacturer::VehicleId,
                VehicleManufacturer::ManufacturerId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(drop_index(IDX_VEHICLE_MANUFACTURER_UNIQUE, VehicleManufacturer::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(VehicleManufacturer::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_STARSHIP_MANUFACTURER_UNIQUE, StarshipManufacturer::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(StarshipManufacturer::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_VEHICLE_PILOT_UNIQUE, VehiclePilot::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(VehiclePilot::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_STARSHIP_PILOT_UNIQUE, StarshipPilot::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(StarshipPilot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StarshipPilot {
    Table,
    Id,
    StarshipId,
    CharacterId,
}

#[derive(DeriveIden)]
enum VehiclePilot {
    Table,
    Id,
    VehicleId,
    CharacterId,
}

#[derive(DeriveIden)]
enum StarshipManufacturer {
    Table,
    Id,
    StarshipId,
    ManufacturerId,
}

#[derive(DeriveIden)]
enum VehicleManufacturer {
    Table,
    Id,
    VehicleId,
    ManufacturerId,
}
