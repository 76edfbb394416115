use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ColorType;

/// An eye, hair or skin color observed for a species.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species_color")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub species_id: i32,
    pub color_id: i32,
    pub color_type: ColorType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Species,
    #[sea_orm(
        belongs_to = "super::color::Entity",
        from = "Column::ColorId",
        to = "super::color::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Color,
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl Related<super::color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Color.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
