use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// デフォルトの国リスト（iso_code, name, sorting）
const COUNTRIES: &[(&str, &str, i32)] = &[
    ("CZ", "Czech Republic", 10),
    ("SK", "Slovakia", 20),
    ("AT", "Austria", 100),
    ("DE", "Germany", 100),
    ("PL", "Poland", 100),
    ("HU", "Hungary", 100),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (iso_code, name, sorting) in COUNTRIES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Countries::Table)
                        .columns([
                            Countries::Id,
                            Countries::IsoCode,
                            Countries::Name,
                            Countries::Sorting,
                        ])
                        .values_panic([
                            Expr::cust("gen_random_uuid()"),
                            (*iso_code).into(),
                            (*name).into(),
                            (*sorting).into(),
                        ])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (iso_code, _, _) in COUNTRIES {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Countries::Table)
                        .and_where(Expr::col(Countries::IsoCode).eq(*iso_code))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Countries {
    Table,
    Id,
    IsoCode,
    Name,
    Sorting,
}
