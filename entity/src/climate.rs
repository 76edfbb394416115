use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "climate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type", unique)]
    pub climate_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_climate::Entity")]
    PlanetClimate,
}

impl Related<super::planet_climate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetClimate.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_climate::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_climate::Relation::Climate.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
