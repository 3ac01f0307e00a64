use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActionLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActionLog::Id))
                    .col(integer_null(ActionLog::UserId))
                    .col(string(ActionLog::Username))
                    .col(string(ActionLog::Role))
                    .col(string(ActionLog::Action))
                    .col(string(ActionLog::Collection))
                    .col(string(ActionLog::TargetId))
                    .col(
                        timestamp_with_time_zone(ActionLog::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(ActionLog::Ip))
                    .col(text(ActionLog::Details).default("{}"))
                    .col(string(ActionLog::Endpoint))
                    .col(string(ActionLog::Status))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActionLog {
    Table,
    Id,
    UserId,
    Username,
    Role,
    Action,
    Collection,
    TargetId,
    Timestamp,
    Ip,
    Details,
    Endpoint,
    Status,
}
