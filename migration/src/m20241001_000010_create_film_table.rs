use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string(Film::Title))
                    .col(integer(Film::EpisodeId))
                    .col(string(Film::OpeningCrawl))
                    .col(timestamp_null(Film::ReleaseDate))
                    .col(string(Film::Url))
                    .col(timestamp(Film::CreatedAt))
                    .col(timestamp(Film::EditedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Film {
    Table,
    Id,
    Title,
    EpisodeId,
    OpeningCrawl,
    ReleaseDate,
    Url,
    CreatedAt,
    EditedAt,
}
