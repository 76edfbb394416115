use entity::prelude::ItemType;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::db::FavoriteModel;

/// Typed view of a favorite's polymorphic `(type, item_id)` pair.
///
/// The schema stores `item_id` without a foreign key, so a favorite may point at a row that
/// does not exist. [`FavoriteItem::exists`] is the opt-in application-level check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteItem {
    Character(i32),
    Film(i32),
    Manufacturer(i32),
    Person(i32),
    Planet(i32),
    Species(i32),
    Starship(i32),
    Vehicle(i32),
}

impl FavoriteItem {
    pub fn from_parts(item_type: ItemType, item_id: i32) -> Self {
        match item_type {
            ItemType::Character => Self::Character(item_id),
            ItemType::Film => Self::Film(item_id),
            ItemType::Manufacturer => Self::Manufacturer(item_id),
            ItemType::Person => Self::Person(item_id),
            ItemType::Planet => Self::Planet(item_id),
            ItemType::Species => Self::Species(item_id),
            ItemType::Starship => Self::Starship(item_id),
            ItemType::Vehicle => Self::Vehicle(item_id),
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Character(_) => ItemType::Character,
            Self::Film(_) => ItemType::Film,
            Self::Manufacturer(_) => ItemType::Manufacturer,
            Self::Person(_) => ItemType::Person,
            Self::Planet(_) => ItemType::Planet,
            Self::Species(_) => ItemType::Species,
            Self::Starship(_) => ItemType::Starship,
            Self::Vehicle(_) => ItemType::Vehicle,
        }
    }

    pub fn item_id(&self) -> i32 {
        match *self {
            Self::Character(id)
            | Self::Film(id)
            | Self::Manufacturer(id)
            | Self::Person(id)
            | Self::Planet(id)
            | Self::Species(id)
            | Self::Starship(id)
            | Self::Vehicle(id) => id,
        }
    }

    /// Builds an unsaved favorite row for `user_id`.
    pub fn into_active_model(self, user_id: i32) -> entity::favorite::ActiveModel {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            item_id: ActiveValue::Set(self.item_id()),
            item_type: ActiveValue::Set(self.item_type()),
            ..Default::default()
        }
    }

    /// Whether the referenced row exists in the table named by the item type.
    pub async fn exists<C>(&self, db: &C) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let id = self.item_id();

        let found = match self {
            Self::Character(_) => entity::prelude::Character::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Film(_) => entity::prelude::Film::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Manufacturer(_) => entity::prelude::Manufacturer::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Person(_) => entity::prelude::Person::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Planet(_) => entity::prelude::Planet::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Species(_) => entity::prelude::Species::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Starship(_) => entity::prelude::Starship::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
            Self::Vehicle(_) => entity::prelude::Vehicle::find_by_id(id)
                .one(db)
                .await?
                .is_some(),
        };

        Ok(found)
    }
}

impl From<&FavoriteModel> for FavoriteItem {
    fn from(model: &FavoriteModel) -> Self {
        Self::from_parts(model.item_type, model.item_id)
    }
}
