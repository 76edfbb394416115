//! Declarative test builder.
//!
//! Configuration methods only queue work; tables and fixtures are created in `build()`.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

pub struct TestBuilder {
    include_schema: bool,
    tables: Vec<TableCreateStatement>,

    planets: Vec<i32>,
    species: Vec<(i32, i32)>,           // (species_id, homeworld_id)
    characters: Vec<(i32, Option<i32>)>, // (character_id, homeworld_id)
    films: Vec<i32>,
    users: Vec<i32>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_schema: false,
            tables: Vec::new(),
            planets: Vec::new(),
            species: Vec::new(),
            characters: Vec::new(),
            films: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create the full catalog schema by running every migration.
    ///
    /// Unlike [`TestBuilder::with_table`], this includes CHECK constraints, foreign keys and
    /// unique pair indexes exactly as a production database gets them.
    pub fn with_schema(mut self) -> Self {
        self.include_schema = true;
        self
    }

    /// Add a single table generated from an entity definition.
    ///
    /// Entity-generated tables carry no CHECK constraints, so enum columns accept any
    /// string. Use [`TestBuilder::with_schema`] when that matters.
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Person)
    ///     .with_table(Manufacturer)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert a species; its homeworld planet is created if missing.
    pub fn with_mock_species(mut self, species_id: i32, homeworld_id: i32) -> Self {
        self.species.push((species_id, homeworld_id));
        self
    }

    /// Insert a character, optionally with a homeworld that is created if missing.
    pub fn with_mock_character(mut self, character_id: i32, homeworld_id: Option<i32>) -> Self {
        self.characters.push((character_id, homeworld_id));
        self
    }

    pub fn with_mock_film(mut self, film_id: i32) -> Self {
        self.films.push(film_id);
        self
    }

    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Create the configured tables, then insert fixtures parents-first.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.include_schema {
            Migrator::up(&context.db, None).await?;
        }
        context.with_tables(self.tables).await?;

        for planet_id in self.planets {
            context.world().insert_mock_planet(planet_id).await?;
        }

        for (species_id, homeworld_id) in self.species {
            context
                .world()
                .insert_mock_species(species_id, homeworld_id)
                .await?;
        }

        for (character_id, homeworld_id) in self.characters {
            context
                .world()
                .insert_mock_character(character_id, homeworld_id)
                .await?;
        }

        for film_id in self.films {
            context.media().insert_mock_film(film_id).await?;
        }

        for user_id in self.users {
            context.user().insert_mock_user(user_id).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::*;
    use sea_orm::EntityTrait;

    use super::*;

    #[tokio::test]
    async fn builds_full_schema() {
        let result = TestBuilder::new().with_schema().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn creates_parents_for_queued_fixtures() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_schema()
            .with_mock_character(1, Some(1))
            .with_mock_species(1, 2)
            .build()
            .await?;

        let planets = Planet::find().all(&test.db).await?;
        assert_eq!(planets.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn fixtures_without_tables_fail() {
        let result = TestBuilder::new().with_mock_planet(1).build().await;

        assert!(matches!(result, Err(TestError::DbErr(_))));
    }

    #[tokio::test]
    async fn creates_entity_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Person).build().await?;

        test.media().insert_mock_person(1).await?;

        Ok(())
    }
}
