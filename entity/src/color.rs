use sea_orm::entity::prelude::*;

/// Shared lookup of eye, hair and skin colors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "color")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::species_color::Entity")]
    SpeciesColor,
}

impl Related<super::species_color::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpeciesColor.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        super::species_color::Relation::Species.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::species_color::Relation::Color.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
