use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Addresses::AddressType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Addresses::FirstName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Addresses::LastName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Addresses::PhoneNumber).string_len(30).null())
                    .col(ColumnDef::new(Addresses::Street).string_len(255).not_null())
                    .col(ColumnDef::new(Addresses::Number).string_len(20).not_null())
                    .col(ColumnDef::new(Addresses::City).string_len(255).not_null())
                    .col(ColumnDef::new(Addresses::Zip).string_len(10).not_null())
                    .col(ColumnDef::new(Addresses::CountryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Addresses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_user_id")
                            .from(Addresses::Table, Addresses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_country_id")
                            .from(Addresses::Table, Addresses::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // (user_id, address_type) は現住所として一意
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Addresses::Table)
                    .name("idx_addresses_user_id_address_type")
                    .col(Addresses::UserId)
                    .col(Addresses::AddressType)
                    .unique()
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
                    .table(Addresses::Table)
                    .name("idx_addresses_user_id_address_type")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    UserId,
    AddressType,
    FirstName,
    LastName,
    PhoneNumber,
    Street,
    Number,
    City,
    Zip,
    CountryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
}
