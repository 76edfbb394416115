//! Closed value sets persisted as string literals.
//!
//! The persisted literal is the upper-case member name (`CHARACTER`, `MALE`, `EYE`, ...),
//! matching the rows already present in existing catalog dumps.

use sea_orm::entity::prelude::*;

/// Tags the table a [`super::favorite::Model::item_id`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemType {
    #[sea_orm(string_value = "CHARACTER")]
    Character,
    #[sea_orm(string_value = "FILM")]
    Film,
    #[sea_orm(string_value = "MANUFACTURER")]
    Manufacturer,
    #[sea_orm(string_value = "PERSON")]
    Person,
    #[sea_orm(string_value = "PLANET")]
    Planet,
    #[sea_orm(string_value = "SPECIES")]
    Species,
    #[sea_orm(string_value = "STARSHIP")]
    Starship,
    #[sea_orm(string_value = "VEHICLE")]
    Vehicle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    /// Droids and other characters without a gender (`n/a` in SWAPI data).
    #[sea_orm(string_value = "AGENDER")]
    Agender,
}

/// Which trait of a species a `species_color` row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ColorType {
    #[sea_orm(string_value = "EYE")]
    Eye,
    #[sea_orm(string_value = "HAIR")]
    Hair,
    #[sea_orm(string_value = "SKIN")]
    Skin,
}
