//! Mapping between the persisted enum literals and the strings used in SWAPI source data.
//!
//! SWAPI spells genders as `Male`, `Female`, `unknown` and `n/a`, and refers to resource
//! kinds and color traits in lower case. A data loader translates through these before
//! writing rows.

use entity::prelude::{ColorType, Gender, ItemType};

use crate::error::Error;

pub trait SwapiLabel: Sized {
    /// Name used in error messages.
    const KIND: &'static str;

    fn swapi_label(&self) -> &'static str;

    fn from_swapi_label(label: &str) -> Result<Self, Error>;
}

fn unknown<T: SwapiLabel>(label: &str) -> Error {
    Error::UnknownLabel {
        kind: T::KIND,
        label: label.to_string(),
    }
}

impl SwapiLabel for Gender {
    const KIND: &'static str = "gender";

    fn swapi_label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "unknown",
            Gender::Agender => "n/a",
        }
    }

    // SWAPI is inconsistent about capitalization between resources.
    fn from_swapi_label(label: &str) -> Result<Self, Error> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "unknown" => Ok(Gender::Unknown),
            "n/a" | "none" => Ok(Gender::Agender),
            _ => Err(unknown::<Self>(label)),
        }
    }
}

impl SwapiLabel for ItemType {
    const KIND: &'static str = "item type";

    fn swapi_label(&self) -> &'static str {
        match self {
            ItemType::Character => "character",
            ItemType::Film => "film",
            ItemType::Manufacturer => "manufacturer",
            ItemType::Person => "person",
            ItemType::Planet => "planet",
            ItemType::Species => "species",
            ItemType::Starship => "starship",
            ItemType::Vehicle => "vehicle",
        }
    }

    fn from_swapi_label(label: &str) -> Result<Self, Error> {
        match label {
            "character" => Ok(ItemType::Character),
            "film" => Ok(ItemType::Film),
            "manufacturer" => Ok(ItemType::Manufacturer),
            "person" => Ok(ItemType::Person),
            "planet" => Ok(ItemType::Planet),
            "species" => Ok(ItemType::Species),
            "starship" => Ok(ItemType::Starship),
            "vehicle" => Ok(ItemType::Vehicle),
            _ => Err(unknown::<Self>(label)),
        }
    }
}

impl SwapiLabel for ColorType {
    const KIND: &'static str = "color type";

    fn swapi_label(&self) -> &'static str {
        match self {
            ColorType::Eye => "eye",
            ColorType::Hair => "hair",
            ColorType::Skin => "skin",
        }
    }

    fn from_swapi_label(label: &str) -> Result<Self, Error> {
        match label {
            "eye" => Ok(ColorType::Eye),
            "hair" => Ok(ColorType::Hair),
            "skin" => Ok(ColorType::Skin),
            _ => Err(unknown::<Self>(label)),
        }
    }
}
