use sea_orm::{ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CharacterModel, ClimateModel, ColorModel, PlanetModel, SpeciesModel, TerrainModel},
    TestContext,
};

impl TestContext {
    pub fn world(&self) -> WorldFixtures<'_> {
        WorldFixtures { setup: self }
    }
}

pub struct WorldFixtures<'a> {
    setup: &'a TestContext,
}

impl WorldFixtures<'_> {
    /// Insert a planet, or return the existing row with that id.
    pub async fn insert_mock_planet(&self, planet_id: i32) -> Result<PlanetModel, TestError> {
        if let Some(planet) = entity::prelude::Planet::find_by_id(planet_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(planet);
        }

        Ok(entity::prelude::Planet::insert(
            factory::mock_planet_model(planet_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_color(&self, color_id: i32, name: &str) -> Result<ColorModel, TestError> {
        Ok(entity::prelude::Color::insert(
            factory::mock_color_model(color_id, name).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_climate(&self, climate_type: &str) -> Result<ClimateModel, TestError> {
        Ok(
            entity::prelude::Climate::insert(entity::climate::ActiveModel {
                climate_type: ActiveValue::Set(climate_type.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_terrain(&self, terrain_type: &str) -> Result<TerrainModel, TestError> {
        Ok(
            entity::prelude::Terrain::insert(entity::terrain::ActiveModel {
                terrain_type: ActiveValue::Set(terrain_type.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a species and, if missing, its homeworld.
    pub async fn insert_mock_species(
        &self,
        species_id: i32,
        homeworld_id: i32,
    ) -> Result<SpeciesModel, TestError> {
        self.insert_mock_planet(homeworld_id).await?;

        Ok(entity::prelude::Species::insert(
            factory::mock_species_model(species_id, homeworld_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a character and, if given and missing, its homeworld.
    pub async fn insert_mock_character(
        &self,
        character_id: i32,
        homeworld_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        if let Some(homeworld_id) = homeworld_id {
            self.insert_mock_planet(homeworld_id).await?;
        }

        Ok(entity::prelude::Character::insert(
            factory::mock_character_model(character_id, homeworld_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Record `character_id` as a resident of `planet_id`.
    pub async fn insert_resident(
        &self,
        planet_id: i32,
        character_id: i32,
    ) -> Result<entity::resident::Model, TestError> {
        Ok(
            entity::prelude::Resident::insert(entity::resident::ActiveModel {
                planet_id: ActiveValue::Set(planet_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
