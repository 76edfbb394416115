use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet_climate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub planet_id: i32,
    pub climate_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::climate::Entity",
        from = "Column::ClimateId",
        to = "super::climate::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Climate,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::climate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Climate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
