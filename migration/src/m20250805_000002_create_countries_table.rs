use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Countries::IsoCode)
                            .string_len(2)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Countries::Sorting)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(Countries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 国リストは表示順で取得するためソートキーにインデックスを作成
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Countries::Table)
                    .name("idx_countries_sorting")
                    .col(Countries::Sorting)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Countries::Table)
                    .name("idx_countries_sorting")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
    Name,
    IsoCode,
    Sorting,
    CreatedAt,
}
