use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubscriptionTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionTypes::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionTypes::Code)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    // 紙面配送を含むかどうかのフラグ
                    .col(
                        ColumnDef::new(SubscriptionTypes::Print)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // 金曜版のみの紙面配送フラグ
                    .col(
                        ColumnDef::new(SubscriptionTypes::PrintFriday)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SubscriptionTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SubscriptionTypes {
    Table,
    Id,
    Name,
    Code,
    Print,
    PrintFriday,
    CreatedAt,
}
