use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "manufacturer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::starship_manufacturer::Entity")]
    StarshipManufacturer,
    #[sea_orm(has_many = "super::vehicle_manufacturer::Entity")]
    VehicleManufacturer,
}

impl Related<super::starship_manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipManufacturer.def()
    }
}

impl Related<super::vehicle_manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleManufacturer.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_manufacturer::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_manufacturer::Relation::Manufacturer.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_manufacturer::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_manufacturer::Relation::Manufacturer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
