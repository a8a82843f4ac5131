use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DisposableWhazzup::Table)
                    .if_not_exists()
                    .col(pk_auto(DisposableWhazzup::Id))
                    .col(string_uniq(DisposableWhazzup::Network))
                    .col(text(DisposableWhazzup::Pilots))
                    .col(timestamp(DisposableWhazzup::CreatedAt))
                    .col(timestamp(DisposableWhazzup::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DisposableWhazzup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DisposableWhazzup {
    Table,
    Id,
    Network,
    Pilots,
    CreatedAt,
    UpdatedAt,
}
