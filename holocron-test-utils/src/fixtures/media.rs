use sea_orm::{ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{FilmModel, ManufacturerModel, PersonModel, StarshipModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn media(&self) -> MediaFixtures<'_> {
        MediaFixtures { setup: self }
    }
}

pub struct MediaFixtures<'a> {
    setup: &'a TestContext,
}

impl MediaFixtures<'_> {
    pub async fn insert_mock_film(&self, film_id: i32) -> Result<FilmModel, TestError> {
        Ok(
            entity::prelude::Film::insert(factory::mock_film_model(film_id).into_active_model())
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    pub async fn insert_mock_starship(&self, starship_id: i32) -> Result<StarshipModel, TestError> {
        Ok(entity::prelude::Starship::insert(
            factory::mock_starship_model(starship_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_vehicle(&self, vehicle_id: i32) -> Result<VehicleModel, TestError> {
        Ok(entity::prelude::Vehicle::insert(
            factory::mock_vehicle_model(vehicle_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_person(&self, person_id: i32) -> Result<PersonModel, TestError> {
        Ok(entity::prelude::Person::insert(
            factory::mock_person_model(person_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> Result<ManufacturerModel, TestError> {
        Ok(entity::prelude::Manufacturer::insert(
            factory::mock_manufacturer_model(manufacturer_id).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_film_director(
        &self,
        film_id: i32,
        person_id: i32,
    ) -> Result<entity::film_director::Model, TestError> {
        Ok(
            entity::prelude::FilmDirector::insert(entity::film_director::ActiveModel {
                film_id: ActiveValue::Set(film_id),
                person_id: ActiveValue::Set(person_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_film_character(
        &self,
        film_id: i32,
        character_id: i32,
    ) -> Result<entity::film_character::Model, TestError> {
        Ok(
            entity::prelude::FilmCharacter::insert(entity::film_character::ActiveModel {
                film_id: ActiveValue::Set(film_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_starship_pilot(
        &self,
        starship_id: i32,
        character_id: i32,
    ) -> Result<entity::starship_pilot::Model, TestError> {
        Ok(
            entity::prelude::StarshipPilot::insert(entity::starship_pilot::ActiveModel {
                starship_id: ActiveValue::Set(starship_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
