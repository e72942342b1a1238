// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 基本テーブルのマイグレーション
mod m20250805_000001_create_users_table;
mod m20250805_000002_create_countries_table;
mod m20250805_000003_create_subscription_types_table;

// サブスクリプション・支払い関連マイグレーション
mod m20250806_000001_create_subscriptions_table;
mod m20250806_000002_create_payments_table;

// 住所・住所変更申請関連マイグレーション
mod m20250807_000001_create_addresses_table;
mod m20250807_000002_create_address_change_requests_table;
mod m20250807_000003_seed_countries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250805_000001_create_users_table::Migration),
            Box::new(m20250805_000002_create_countries_table::Migration),
            Box::new(m20250805_000003_create_subscription_types_table::Migration),
            // 2. 依存テーブル作成（users / subscription_typesに依存）
            Box::new(m20250806_000001_create_subscriptions_table::Migration),
            Box::new(m20250806_000002_create_payments_table::Migration),
            // 3. 住所関連テーブル作成（users / countriesに依存）
            Box::new(m20250807_000001_create_addresses_table::Migration),
            Box::new(m20250807_000002_create_address_change_requests_table::Migration),
            // 4. 国マスタの初期データ投入
            Box::new(m20250807_000003_seed_countries::Migration),
        ]
    }
}
