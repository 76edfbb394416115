use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string(Planet::Name))
                    .col(integer_null(Planet::Diameter))
                    .col(integer(Planet::RotationPeriod))
                    .col(integer(Planet::OrbitalPeriod))
                    .col(double(Planet::Gravity))
                    .col(integer_null(Planet::Population))
                    .col(double_null(Planet::SurfaceWater))
                    .col(string(Planet::Url))
                    .col(timestamp(Planet::CreatedAt))
                    .col(timestamp(Planet::EditedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    SurfaceWater,
    Url,
    CreatedAt,
    EditedAt,
}
