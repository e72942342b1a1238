use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AddressChangeRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AddressChangeRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::UserId)
                            .uuid()
                            .not_null(),
                    )
                    // 受理時に反映先となる既存住所（新規作成の場合はnull）
                    .col(ColumnDef::new(AddressChangeRequests::AddressId).uuid().null())
                    .col(
                        ColumnDef::new(AddressChangeRequests::AddressType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::FirstName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::LastName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::PhoneNumber)
                            .string_len(30)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::Street)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::Number)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::City)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::Zip)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::CountryId)
                            .uuid()
                            .not_null(),
                    )
                    // 請求先住所バリアント用のカラム（printタイプでは常にnull）
                    .col(
                        ColumnDef::new(AddressChangeRequests::CompanyName)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::CompanyId)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::CompanyTaxId)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::CompanyVatId)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AddressChangeRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_change_requests_user_id")
                            .from(
                                AddressChangeRequests::Table,
                                AddressChangeRequests::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_change_requests_address_id")
                            .from(
                                AddressChangeRequests::Table,
                                AddressChangeRequests::AddressId,
                            )
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_change_requests_country_id")
                            .from(
                                AddressChangeRequests::Table,
                                AddressChangeRequests::CountryId,
                            )
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ユーザー・タイプ別の申請一覧取得用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(AddressChangeRequests::Table)
                    .name("idx_address_change_requests_user_id_address_type")
                    .col(AddressChangeRequests::UserId)
                    .col(AddressChangeRequests::AddressType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(AddressChangeRequests::Table)
                    .name("idx_address_change_requests_status")
                    .col(AddressChangeRequests::Status)
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
                    .table(AddressChangeRequests::Table)
                    .name("idx_address_change_requests_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(AddressChangeRequests::Table)
                    .name("idx_address_change_requests_user_id_address_type")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AddressChangeRequests::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum AddressChangeRequests {
    Table,
    Id,
    UserId,
    AddressId,
    AddressType,
    Status,
    FirstName,
    LastName,
    PhoneNumber,
    Street,
    Number,
    City,
    Zip,
    CountryId,
    CompanyName,
    CompanyId,
    CompanyTaxId,
    CompanyVatId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
}
