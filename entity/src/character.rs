use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub homeworld: Option<i32>,
    pub eye_color_id: Option<i32>,
    pub hair_color_id: Option<i32>,
    pub skin_color_id: Option<i32>,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Gender,
    pub height: f64,
    pub mass: f64,
    pub url: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::Homeworld",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Homeworld,
    #[sea_orm(
        belongs_to = "super::color::Entity",
        from = "Column::EyeColorId",
        to = "super::color::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    EyeColor,
    #[sea_orm(
        belongs_to = "super::color::Entity",
        from = "Column::HairColorId",
        to = "super::color::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    HairColor,
    #[sea_orm(
        belongs_to = "super::color::Entity",
        from = "Column::SkinColorId",
        to = "super::color::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    SkinColor,
    #[sea_orm(has_many = "super::film_character::Entity")]
    FilmCharacter,
    #[sea_orm(has_many = "super::resident::Entity")]
    Resident,
    #[sea_orm(has_many = "super::species_individual::Entity")]
    SpeciesIndividual,
    #[sea_orm(has_many = "super::starship_pilot::Entity")]
    StarshipPilot,
    #[sea_orm(has_many = "super::vehicle_pilot::Entity")]
    VehiclePilot,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::film_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmCharacter.def()
    }
}

impl Related<super::resident::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resident.def()
    }
}

impl Related<super::species_individual::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesIndividual.def()
    }
}

impl Related<super::starship_pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipPilot.def()
    }
}

impl Related<super::vehicle_pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehiclePilot.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Character.def().rev())
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_individual::Relation::Species.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_individual::Relation::Character.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_pilot::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_pilot::Relation::Character.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_pilot::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_pilot::Relation::Character.def().rev())
    }
}

pub struct CharacterToEyeColor;

impl Linked for CharacterToEyeColor {
    type FromEntity = Entity;
    type ToEntity = super::color::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::EyeColor.def()]
    }
}

pub struct CharacterToHairColor;

impl Linked for CharacterToHairColor {
    type FromEntity = Entity;
    type ToEntity = super::color::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::HairColor.def()]
    }
}

pub struct CharacterToSkinColor;

impl Linked for CharacterToSkinColor {
    type FromEntity = Entity;
    type ToEntity = super::color::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::SkinColor.def()]
    }
}

/// Planets the character is listed as a resident of.
pub struct CharacterToResidence;

impl Linked for CharacterToResidence {
    type FromEntity = Entity;
    type ToEntity = super::planet::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::resident::Relation::Character.def().rev(),
            super::resident::Relation::Planet.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
