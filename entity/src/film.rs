use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub episode_id: i32,
    pub opening_crawl: String,
    pub release_date: Option<DateTime>,
    pub url: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_director::Entity")]
    FilmDirector,
    #[sea_orm(has_many = "super::film_producer::Entity")]
    FilmProducer,
    #[sea_orm(has_many = "super::film_character::Entity")]
    FilmCharacter,
    #[sea_orm(has_many = "super::film_planet::Entity")]
    FilmPlanet,
    #[sea_orm(has_many = "super::film_species::Entity")]
    FilmSpecies,
    #[sea_orm(has_many = "super::film_starship::Entity")]
    FilmStarship,
    #[sea_orm(has_many = "super::film_vehicle::Entity")]
    FilmVehicle,
}

impl Related<super::film_director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmDirector.def()
    }
}

impl Related<super::film_producer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmProducer.def()
    }
}

impl Related<super::film_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmCharacter.def()
    }
}

impl Related<super::film_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmPlanet.def()
    }
}

impl Related<super::film_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmSpecies.def()
    }
}

impl Related<super::film_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmStarship.def()
    }
}

impl Related<super::film_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmVehicle.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Film.def().rev())
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_species::Relation::Species.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_species::Relation::Film.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_starship::Relation::Film.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_vehicle::Relation::Film.def().rev())
    }
}

/// People credited as directors of the film.
pub struct FilmToDirector;

impl Linked for FilmToDirector {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::film_director::Relation::Film.def().rev(),
            super::film_director::Relation::Person.def(),
        ]
    }
}

/// People credited as producers of the film.
pub struct FilmToProducer;

impl Linked for FilmToProducer {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::film_producer::Relation::Film.def().rev(),
            super::film_producer::Relation::Person.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
