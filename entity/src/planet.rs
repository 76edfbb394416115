use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: f64,
    pub population: Option<i32>,
    pub surface_water: Option<f64>,
    pub url: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Characters whose homeworld is this planet.
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::species::Entity")]
    Species,
    #[sea_orm(has_many = "super::resident::Entity")]
    Resident,
    #[sea_orm(has_many = "super::film_planet::Entity")]
    FilmPlanet,
    #[sea_orm(has_many = "super::planet_climate::Entity")]
    PlanetClimate,
    #[sea_orm(has_many = "super::planet_terrain::Entity")]
    PlanetTerrain,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl Related<super::resident::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resident.def()
    }
}

impl Related<super::film_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmPlanet.def()
    }
}

impl Related<super::planet_climate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetClimate.def()
    }
}

impl Related<super::planet_terrain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetTerrain.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Planet.def().rev())
    }
}

impl Related<super::climate::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_climate::Relation::Climate.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_climate::Relation::Planet.def().rev())
    }
}

impl Related<super::terrain::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_terrain::Relation::Terrain.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_terrain::Relation::Planet.def().rev())
    }
}

/// Characters listed as residents of the planet.
///
/// Kept apart from [`Relation::Character`] since a resident's homeworld may differ.
pub struct PlanetToResident;

impl Linked for PlanetToResident {
    type FromEntity = Entity;
    type ToEntity = super::character::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::resident::Relation::Planet.def().rev(),
            super::resident::Relation::Character.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
