use sea_orm::entity::prelude::*;

/// Someone credited on a film, as director or producer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_director::Entity")]
    FilmDirector,
    #[sea_orm(has_many = "super::film_producer::Entity")]
    FilmProducer,
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

/// Films this person directed.
pub struct PersonToDirectedFilm;

impl Linked for PersonToDirectedFilm {
    type FromEntity = Entity;
    type ToEntity = super::film::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::film_director::Relation::Person.def().rev(),
            super::film_director::Relation::Film.def(),
        ]
    }
}

/// Films this person produced.
pub struct PersonToProducedFilm;

impl Linked for PersonToProducedFilm {
    type FromEntity = Entity;
    type ToEntity = super::film::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::film_producer::Relation::Person.def().rev(),
            super::film_producer::Relation::Film.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
