use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string(Starship::Name))
                    .col(string(Starship::Model))
                    .col(string(Starship::StarshipClass))
                    .col(double_null(Starship::CostInCredits))
                    .col(double(Starship::Length))
                    .col(integer(Starship::Crew))
                    .col(integer(Starship::Passengers))
                    .col(double_null(Starship::MaxAtmospheringSpeed))
                    .col(double(Starship::HyperdriveRating))
                    .col(string(Starship::Mglt))
                    .col(double(Starship::CargoCapacity))
                    .col(string(Starship::Consumables))
                    .col(string(Starship::Url))
                    .col(timestamp(Starship::CreatedAt))
                    .col(timestamp(Starship::EditedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    StarshipClass,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    HyperdriveRating,
    Mglt,
    CargoCapacity,
    Consumables,
    Url,
    CreatedAt,
    EditedAt,
}
