use sea_orm_migration::{prelude::*, schema::*};

use crate::{common::restrict_fk, m20241001_000001_create_planet_table::Planet};

static FK_SPECIES_HOMEWORLD: &str = "fk-species-homeworld";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string(Species::Name))
                    .col(string(Species::Classification))
                    .col(string(Species::Designation))
                    .col(double_null(Species::AverageHeight))
                    .col(integer_null(Species::AverageLifespan))
                    .col(string(Species::Language))
                    .col(integer(Species::Homeworld))
                    .col(string(Species::Url))
                    .col(timestamp(Species::CreatedAt))
                    .col(timestamp(Species::EditedAt))
                    .foreign_key(&mut restrict_fk(
                        FK_SPECIES_HOMEWORLD,
                        Species::Table,
                        Species::Homeworld,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    AverageHeight,
    AverageLifespan,
    Language,
    Homeworld,
    Url,
    CreatedAt,
    EditedAt,
}
