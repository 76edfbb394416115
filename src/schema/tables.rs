use entity::prelude::{ColorType, Gender, ItemType};

use super::catalog::{EnumDef, SchemaCatalog, TableDef};

/// Declares every table of the catalog database, in migration order.
pub(super) fn build() -> SchemaCatalog {
    SchemaCatalog::new(vec![
        TableDef::new("planet")
            .string("name")
            .integer_null("diameter")
            .integer("rotation_period")
            .integer("orbital_period")
            .double("gravity")
            .integer_null("population")
            .double_null("surface_water")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at"),
        TableDef::new("color").string_uniq("name"),
        TableDef::new("climate").string_uniq("type"),
        TableDef::new("terrain").string_uniq("type"),
        TableDef::new("person").string("name"),
        TableDef::new("manufacturer").string("name"),
        TableDef::new("user")
            .string_uniq("email")
            .string("hashed_password")
            .string("name")
            .timestamp_now("created_at")
            .timestamp_now("updated_at"),
        // item_id is polymorphic over `type` and intentionally carries no foreign key.
        TableDef::new("favorite")
            .integer("user_id")
            .integer("item_id")
            .enumeration("type", EnumDef::of::<ItemType>("item_type"))
            .references("user_id", "user"),
        TableDef::new("character")
            .integer_null("homeworld")
            .integer_null("eye_color_id")
            .integer_null("hair_color_id")
            .integer_null("skin_color_id")
            .string("name")
            .string_null("birth_year")
            .enumeration("gender", EnumDef::of::<Gender>("gender"))
            .double("height")
            .double("mass")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at")
            .references("homeworld", "planet")
            .references("eye_color_id", "color")
            .references("hair_color_id", "color")
            .references("skin_color_id", "color"),
        TableDef::new("film")
            .string("title")
            .integer("episode_id")
            .string("opening_crawl")
            .timestamp_null("release_date")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at"),
        TableDef::new("starship")
            .string("name")
            .string("model")
            .string("starship_class")
            .double_null("cost_in_credits")
            .double("length")
            .integer("crew")
            .integer("passengers")
            .double_null("max_atmosphering_speed")
            .double("hyperdrive_rating")
            .string("mglt")
            .double("cargo_capacity")
            .string("consumables")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at"),
        TableDef::new("vehicle")
            .string("name")
            .string("model")
            .string("vehicle_class")
            .double("length")
            .double_null("cost_in_credits")
            .integer("crew")
            .integer("passengers")
            .double_null("max_atmosphering_speed")
            .double("cargo_capacity")
            .string("consumables")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at"),
        TableDef::new("species")
            .string("name")
            .string("classification")
            .string("designation")
            .double_null("average_height")
            .integer_null("average_lifespan")
            .string("language")
            .integer("homeworld")
            .string("url")
            .timestamp("created_at")
            .timestamp("edited_at")
            .references("homeworld", "planet"),
        TableDef::association("film_director", ("film_id", "film"), ("person_id", "person")),
        TableDef::association("film_producer", ("film_id", "film"), ("person_id", "person")),
        TableDef::association(
            "film_character",
            ("film_id", "film"),
            ("character_id", "character"),
        ),
        TableDef::association("film_planet", ("film_id", "film"), ("planet_id", "planet")),
        TableDef::association("film_species", ("film_id", "film"), ("species_id", "species")),
        TableDef::association(
            "film_starship",
            ("film_id", "film"),
            ("starship_id", "starship"),
        ),
        TableDef::association("film_vehicle", ("film_id", "film"), ("vehicle_id", "vehicle")),
        TableDef::association(
            "resident",
            ("planet_id", "planet"),
            ("character_id", "character"),
        ),
        TableDef::association(
            "planet_climate",
            ("planet_id", "planet"),
            ("climate_id", "climate"),
        ),
        TableDef::association(
            "planet_terrain",
            ("planet_id", "planet"),
            ("terrain_id", "terrain"),
        ),
        species_color(),
        TableDef::association(
            "species_individual",
            ("species_id", "species"),
            ("character_id", "character"),
        ),
        TableDef::association(
            "starship_pilot",
            ("starship_id", "starship"),
            ("character_id", "character"),
        ),
        TableDef::association(
            "vehicle_pilot",
            ("vehicle_id", "vehicle"),
            ("character_id", "character"),
        ),
        TableDef::association(
            "starship_manufacturer",
            ("starship_id", "starship"),
            ("manufacturer_id", "manufacturer"),
        ),
        TableDef::association(
            "vehicle_manufacturer",
            ("vehicle_id", "vehicle"),
            ("manufacturer_id", "manufacturer"),
        ),
    ])
}

/// The one association table with a payload column: which trait the color describes.
fn species_color() -> TableDef {
    let mut table = TableDef::association(
        "species_color",
        ("species_id", "species"),
        ("color_id", "color"),
    )
    .enumeration("color_type", EnumDef::of::<ColorType>("color_type"));

    table.unique = vec![vec!["species_id", "color_id", "color_type"]];
    table
}

#[cfg(test)]
mod tests {
    use crate::schema::catalog;

    #[test]
    fn catalog_declares_every_table() {
        let catalog = catalog();

        assert_eq!(catalog.tables().len(), 29);
        assert_eq!(catalog.association_tables().count(), 16);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn dependency_order_creates_referenced_tables_first() {
        let catalog = catalog();
        let ordered = catalog.dependency_order().unwrap();
        let position = |name: &str| ordered.iter().position(|t| t.name == name).unwrap();

        assert_eq!(ordered.len(), catalog.tables().len());
        for edge in catalog.edges() {
            assert!(
                position(edge.to_table) < position(edge.from_table),
                "{} must be created before {}",
                edge.to_table,
                edge.from_table
            );
        }
    }

    #[test]
    fn favorite_item_id_is_not_a_foreign_key() {
        let favorite = catalog().table("favorite").unwrap();

        assert!(favorite.foreign_key("item_id").is_none());
        assert!(favorite.foreign_key("user_id").is_some());
    }

    #[test]
    fn natural_keys_are_unique() {
        let catalog = catalog();

        for (table, column) in [
            ("user", "email"),
            ("color", "name"),
            ("climate", "type"),
            ("terrain", "type"),
        ] {
            let column = catalog.table(table).unwrap().column(column).unwrap();
            assert!(column.unique, "{table}.{} should be unique", column.name);
        }
    }

    #[test]
    fn species_color_is_unique_over_its_type_too() {
        let table = catalog().table("species_color").unwrap();

        assert_eq!(
            table.unique,
            vec![vec!["species_id", "color_id", "color_type"]]
        );
    }
}
