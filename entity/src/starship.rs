use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub cost_in_credits: Option<f64>,
    pub length: f64,
    pub crew: i32,
    pub passengers: i32,
    pub max_atmosphering_speed: Option<f64>,
    pub hyperdrive_rating: f64,
    pub mglt: String,
    pub cargo_capacity: f64,
    pub consumables: String,
    pub url: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_starship::Entity")]
    FilmStarship,
    #[sea_orm(has_many = "super::starship_pilot::Entity")]
    StarshipPilot,
    #[sea_orm(has_many = "super::starship_manufacturer::Entity")]
    StarshipManufacturer,
}

impl Related<super::film_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmStarship.def()
    }
}

impl Related<super::starship_pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipPilot.def()
    }
}

impl Related<super::starship_manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipManufacturer.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_starship::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_starship::Relation::Starship.def().rev())
    }
}

/// Pilots of the starship.
impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_pilot::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_pilot::Relation::Starship.def().rev())
    }
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_manufacturer::Relation::Manufacturer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_manufacturer::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
