use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DisposableSceneries::Table)
                    .if_not_exists()
                    .col(pk_auto(DisposableSceneries::Id))
                    .col(integer(DisposableSceneries::UserId))
                    .col(string_len(DisposableSceneries::AirportId, 5))
                    .col(string_null(DisposableSceneries::Region))
                    .col(integer(DisposableSceneries::Simulator))
                    .col(text_null(DisposableSceneries::Notes))
                    .col(timestamp(DisposableSceneries::CreatedAt))
                    .col(timestamp(DisposableSceneries::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_disposable_sceneries_user_id")
                    .table(DisposableSceneries::Table)
                    .col(DisposableSceneries::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DisposableSceneries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DisposableSceneries {
    Table,
    Id,
    UserId,
    AirportId,
    Region,
    Simulator,
    Notes,
    CreatedAt,
    UpdatedAt,
}
