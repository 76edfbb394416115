use sea_orm::entity::prelude::*;

/// A ground or atmospheric craft. Shares the starship shape minus hyperdrive rating and MGLT.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub length: f64,
    pub cost_in_credits: Option<f64>,
    pub crew: i32,
    pub passengers: i32,
    pub max_atmosphering_speed: Option<f64>,
    pub cargo_capacity: f64,
    pub consumables: String,
    pub url: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_vehicle::Entity")]
    FilmVehicle,
    #[sea_orm(has_many = "super::vehicle_pilot::Entity")]
    VehiclePilot,
    #[sea_orm(has_many = "super::vehicle_manufacturer::Entity")]
    VehicleManufacturer,
}

impl Related<super::film_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmVehicle.def()
    }
}

impl Related<super::vehicle_pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehiclePilot.def()
    }
}

impl Related<super::vehicle_manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleManufacturer.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_vehicle::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_vehicle::Relation::Vehicle.def().rev())
    }
}

/// Pilots of the vehicle.
impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_pilot::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_pilot::Relation::Vehicle.def().rev())
    }
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_manufacturer::Relation::Manufacturer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_manufacturer::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
