use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Model))
                    .col(string(Vehicle::VehicleClass))
                    .col(double(Vehicle::Length))
                    .col(double_null(Vehicle::CostInCredits))
                    .col(integer(Vehicle::Crew))
                    .col(integer(Vehicle::Passengers))
                    .col(double_null(Vehicle::MaxAtmospheringSpeed))
                    .col(double(Vehicle::CargoCapacity))
                    .col(string(Vehicle::Consumables))
                    .col(string(Vehicle::Url))
                    .col(timestamp(Vehicle::CreatedAt))
                    .col(timestamp(Vehicle::EditedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Length,
    CostInCredits,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
    Url,
    CreatedAt,
    EditedAt,
}
