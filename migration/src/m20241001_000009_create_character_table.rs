use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{restrict_fk, GENDER_LITERALS},
    m20241001_000001_create_planet_table::Planet,
    m20241001_000002_create_color_table::Color,
};

static FK_CHARACTER_HOMEWORLD: &str = "fk-character-homeworld";
static FK_CHARACTER_EYE_COLOR_ID: &str = "fk-character-eye_color_id";
static FK_CHARACTER_HAIR_COLOR_ID: &str = "fk-character-hair_color_id";
static FK_CHARACTER_SKIN_COLOR_ID: &str = "fk-character-skin_color_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer_null(Character::Homeworld))
                    .col(integer_null(Character::EyeColorId))
                    .col(integer_null(Character::HairColorId))
                    .col(integer_null(Character::SkinColorId))
                    .col(string(Character::Name))
                    .col(string_null(Character::BirthYear))
                    .col(
                        string(Character::Gender)
                            .check(Expr::col(Character::Gender).is_in(GENDER_LITERALS)),
                    )
                    .col(double(Character::Height))
                    .col(double(Character::Mass))
                    .col(string(Character::Url))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::EditedAt))
                    .foreign_key(&mut restrict_fk(
                        FK_CHARACTER_HOMEWORLD,
                        Character::Table,
                        Character::Homeworld,
                        Planet::Table,
                        Planet::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_CHARACTER_EYE_COLOR_ID,
                        Character::Table,
                        Character::EyeColorId,
                        Color::Table,
                        Color::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_CHARACTER_HAIR_COLOR_ID,
                        Character::Table,
                        Character::HairColorId,
                        Color::Table,
                        Color::Id,
                    ))
                    .foreign_key(&mut restrict_fk(
                        FK_CHARACTER_SKIN_COLOR_ID,
                        Character::Table,
                        Character::SkinColorId,
                        Color::Table,
                        Color::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Homeworld,
    EyeColorId,
    HairColorId,
    SkinColorId,
    Name,
    BirthYear,
    Gender,
    Height,
    Mass,
    Url,
    CreatedAt,
    EditedAt,
}
