use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "terrain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type", unique)]
    pub terrain_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_terrain::Entity")]
    PlanetTerrain,
}

impl Related<super::planet_terrain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetTerrain.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_terrain::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_terrain::Relation::Terrain.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
