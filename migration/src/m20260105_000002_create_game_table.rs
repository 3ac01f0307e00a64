use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(big_integer(Game::Appid).primary_key())
                    .col(string(Game::Name))
                    .col(string(Game::ReleaseDate))
                    .col(double(Game::Price).default(0.0))
                    .col(text_null(Game::ShortDescription))
                    .col(text_null(Game::DetailedDescription))
                    .col(text_null(Game::AboutTheGame))
                    .col(string_null(Game::HeaderImage))
                    .col(string_null(Game::Website))
                    .col(string_null(Game::SupportUrl))
                    .col(text(Game::Developers).default("[]"))
                    .col(text(Game::Publishers).default("[]"))
                    .col(text(Game::Genres).default("[]"))
                    .col(text(Game::Tags).default("[]"))
                    .col(text(Game::SupportedLanguages).default("[]"))
                    .col(text(Game::Screenshots).default("[]"))
                    .col(text(Game::Movies).default("[]"))
                    .col(big_integer(Game::Positive).default(0))
                    .col(big_integer(Game::Negative).default(0))
                    .col(integer_null(Game::PctPosTotal))
                    .col(integer(Game::MetacriticScore).default(0))
                    .col(big_integer(Game::PeakCcu).default(0))
                    .col(big_integer(Game::AveragePlaytimeForever).default(0))
                    .col(big_integer(Game::MedianPlaytimeForever).default(0))
                    .col(big_integer(Game::AveragePlaytime2weeks).default(0))
                    .col(big_integer(Game::MedianPlaytime2weeks).default(0))
                    .col(string_null(Game::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Game::LastModifiedBy))
                    .col(timestamp_with_time_zone_null(Game::LastModifiedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_name")
                    .table(Game::Table)
                    .col(Game::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Appid,
    Name,
    ReleaseDate,
    Price,
    ShortDescription,
    DetailedDescription,
    AboutTheGame,
    HeaderImage,
    Website,
    SupportUrl,
    Developers,
    Publishers,
    Genres,
    Tags,
    SupportedLanguages,
    Screenshots,
    Movies,
    Positive,
    Negative,
    PctPosTotal,
    MetacriticScore,
    PeakCcu,
    AveragePlaytimeForever,
    MedianPlaytimeForever,
    #[sea_orm(iden = "average_playtime_2weeks")]
    AveragePlaytime2weeks,
    #[sea_orm(iden = "median_playtime_2weeks")]
    MedianPlaytime2weeks,
    CreatedBy,
    CreatedAt,
    LastModifiedBy,
    LastModifiedAt,
}
