use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{drop_index, pair_index, restrict_fk, COLOR_TYPE_LITERALS},
    m20241001_000002_create_color_table::Color,
    m20241001_000009_create_character_table::Character,
    m20241001_000013_create_species_table::Species,
};

static FK_SPECIES_COLOR_SPECIES_ID: &str = "fk-species_color-species_id";
static FK_SPECIES_COLOR_COLOR_ID: &str = "fk-species_color-color_id";
static IDX_SPECIES_COLOR_UNIQUE: &str = "idx-species_color-unique";
static FK_SPECIES_INDIVIDUAL_SPECIES_ID: &str = "fk-species_individual-species_id";
static FK_SPECIES_INDIVIDUAL_CHARACTER_ID: &str = "fk-species_individual-character_id";
static IDX_SPECIES_INDIVIDUAL_UNIQUE: &str = "idx-species_individual-unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpeciesColor::Table)
                    .if_not_exists()
                    .col(pk_auto(SpeciesColor::Id))
                    .col(integer(SpeciesColor::SpeciesId))
                    .col(integer(SpeciesColor::ColorId))
                    .col(
                        string(SpeciesColor::ColorType)
                            .check(Expr::col(SpeciesColor::ColorType).is_in(COLOR_TYPE_LITERALS)),
                    )
                    .foreign_key(&mut restrict_fk(
                        FK_SPECIES_COLOR_SPECIES_ID,
                        SpeciesColor::Table,
                        SpeciesColor::SpeciesId,
                        Species::Table,
                        Species::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_SPECIES_COLOR_COLOR_ID,
                        SpeciesColor::Table,
                        SpeciesColor::ColorId,
                        Color::Table,
                        Color::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPECIES_COLOR_UNIQUE)
                    .table(SpeciesColor::Table)
                    .col(SpeciesColor::SpeciesId)
                    .col(SpeciesColor::ColorId)
                    .col(SpeciesColor::ColorType)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpeciesIndividual::Table)
                    .if_not_exists()
                    .col(pk_auto(SpeciesIndividual::Id))
                    .col(integer(SpeciesIndividual::SpeciesId))
                    .col(integer(SpeciesIndividual::CharacterId))
                    .foreign_key(&mut restrict_fk(
                        FK_SPECIES_INDIVIDUAL_SPECIES_ID,
                        SpeciesIndividual::Table,
                        SpeciesIndividual::SpeciesId,
                        Species::Table,
                        Species::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_SPECIES_INDIVIDUAL_CHARACTER_ID,
                        SpeciesIndividual::Table,
                        SpeciesIndividual::CharacterId,
                        Character::Table,
                        Character::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(pair_index(
                IDX_SPECIES_INDIVIDUAL_UNIQUE,
                SpeciesIndividual::Table,
                SpeciesIndividual::SpeciesId,
                SpeciesIndividual::CharacterId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(drop_index(IDX_SPECIES_INDIVIDUAL_UNIQUE, SpeciesIndividual::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(SpeciesIndividual::Table).to_owned())
            .await?;

        manager
            .drop_index(drop_index(IDX_SPECIES_COLOR_UNIQUE, SpeciesColor::Table))
            .await?;

        manager
            .drop_table(Table::drop().table(SpeciesColor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SpeciesColor {
    Table,
    Id,
    SpeciesId,
    ColorId,
    ColorType,
}

#[derive(DeriveIden)]
enum SpeciesIndividual {
    Table,
    Id,
    SpeciesId,
    CharacterId,
}
