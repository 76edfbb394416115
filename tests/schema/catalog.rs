//! Tests that the schema catalog, the entity definitions and the migrated database agree.

use holocron::schema::catalog;
use holocron_test_utils::prelude::*;
use migration::SchemaManager;
use sea_orm::{entity::prelude::*, EntityName, Iterable};

fn columns_of<E>(entity: E) -> (&'static str, Vec<String>)
where
    E: EntityTrait,
{
    let columns = E::Column::iter().map(|c| c.as_str().to_string()).collect();

    (entity.table_name(), columns)
}

fn entity_tables() -> Vec<(&'static str, Vec<String>)> {
    use entity::prelude::*;

    vec![
        columns_of(Planet),
        columns_of(Color),
        columns_of(Climate),
        columns_of(Terrain),
        columns_of(Person),
        columns_of(Manufacturer),
        columns_of(User),
        columns_of(Favorite),
        columns_of(Character),
        columns_of(Film),
        columns_of(Starship),
        columns_of(Vehicle),
        columns_of(Species),
        columns_of(FilmDirector),
        columns_of(FilmProducer),
        columns_of(FilmCharacter),
        columns_of(FilmPlanet),
        columns_of(FilmSpecies),
        columns_of(FilmStarship),
        columns_of(FilmVehicle),
        columns_of(Resident),
        columns_of(PlanetClimate),
        columns_of(PlanetTerrain),
        columns_of(SpeciesColor),
        columns_of(SpeciesIndividual),
        columns_of(StarshipPilot),
        columns_of(VehiclePilot),
        columns_of(StarshipManufacturer),
        columns_of(VehicleManufacturer),
    ]
}

/// Tests that every entity has a catalog table with the same columns in the same order.
///
/// Expected: one catalog table per entity, identical column lists
#[test]
fn catalog_matches_entity_definitions() {
    let entities = entity_tables();

    assert_eq!(entities.len(), catalog().tables().len());

    for (table_name, entity_columns) in entities {
        let table = catalog()
            .table(table_name)
            .unwrap_or_else(|| panic!("catalog lacks table {table_name}"));
        let catalog_columns: Vec<String> =
            table.columns.iter().map(|c| c.name.to_string()).collect();

        assert_eq!(catalog_columns, entity_columns, "columns differ for {table_name}");
    }
}

/// Tests that migrations create every table and column the catalog declares.
///
/// Expected: Ok with every catalog column present
#[tokio::test]
async fn migrations_create_every_catalog_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let manager = SchemaManager::new(&test.db);

    for table in catalog().tables() {
        assert!(manager.has_table(table.name).await?, "missing {}", table.name);

        for column in &table.columns {
            assert!(
                manager.has_column(table.name, column.name).await?,
                "missing {}.{}",
                table.name,
                column.name
            );
        }
    }

    Ok(())
}

/// Tests that the unique pair index on association tables exists after migration.
///
/// Expected: Ok with one index per association table
#[tokio::test]
async fn migrations_create_association_pair_indexes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let manager = SchemaManager::new(&test.db);

    for table in catalog().association_tables() {
        let index = format!("idx-{}-unique", table.name);
        assert!(
            manager.has_index(table.name, &index).await?,
            "missing index {index}"
        );
    }

    Ok(())
}
