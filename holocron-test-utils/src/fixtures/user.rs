use entity::prelude::ItemType;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{FavoriteModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl UserFixtures<'_> {
    /// Insert a user through the active model so `created_at`/`updated_at` are stamped.
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(user_id);

        Ok(entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            email: ActiveValue::Set(user.email),
            hashed_password: ActiveValue::Set(user.hashed_password),
            name: ActiveValue::Set(user.name),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        item_type: ItemType,
        item_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                item_id: ActiveValue::Set(item_id),
                item_type: ActiveValue::Set(item_type),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
