use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    common::{restrict_fk, ITEM_TYPE_LITERALS},
    m20241001_000007_create_user_table::User,
};

static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // item_id points into the table named by `type`; it is not a foreign key.
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::ItemId))
                    .col(
                        string(Favorite::Type)
                            .check(Expr::col(Favorite::Type).is_in(ITEM_TYPE_LITERALS)),
                    )
                    .foreign_key(&mut restrict_fk(
                        FK_FAVORITE_USER_ID,
                        Favorite::Table,
                        Favorite::UserId,
                        User::Table,
                        User::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    ItemId,
    Type,
}
