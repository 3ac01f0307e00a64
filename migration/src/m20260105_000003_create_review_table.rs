use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(big_integer(Review::Appid))
                    .col(string(Review::Username))
                    .col(text(Review::Comment))
                    .col(integer(Review::Rating))
                    .col(integer_null(Review::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Review::UpdatedAt))
                    .col(integer_null(Review::UpdatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_appid")
                            .from(Review::Table, Review::Appid)
                            .to(Game::Table, Game::Appid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_created_at")
                    .table(Review::Table)
                    .col(Review::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    Appid,
    Username,
    Comment,
    Rating,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    UpdatedBy,
}
