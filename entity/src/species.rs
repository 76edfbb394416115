use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: Option<f64>,
    pub average_lifespan: Option<i32>,
    pub language: String,
    pub homeworld: i32,
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
    #[sea_orm(has_many = "super::film_species::Entity")]
    FilmSpecies,
    #[sea_orm(has_many = "super::species_color::Entity")]
    SpeciesColor,
    #[sea_orm(has_many = "super::species_individual::Entity")]
    SpeciesIndividual,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::film_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmSpecies.def()
    }
}

impl Related<super::species_color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesColor.def()
    }
}

impl Related<super::species_individual::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesIndividual.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_species::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_species::Relation::Species.def().rev())
    }
}

impl Related<super::color::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_color::Relation::Color.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_color::Relation::Species.def().rev())
    }
}

/// Individual characters belonging to the species.
impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_individual::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_individual::Relation::Species.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
