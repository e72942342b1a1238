// src/domain/subscription_type_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// サブスクリプション種別エンティティ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub code: String,

    /// 紙面配送を含むかどうか
    pub print: bool,

    /// 金曜版のみの紙面配送かどうか
    pub print_friday: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subscription_model::Entity")]
    Subscriptions,
}

impl Related<super::subscription_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 紙面の配送先住所が必要な種別かチェック
    pub fn requires_delivery_address(&self) -> bool {
        self.print || self.print_friday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription_type(print: bool, print_friday: bool) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "Print Daily".to_string(),
            code: "print_daily".to_string(),
            print,
            print_friday,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_requires_delivery_address() {
        assert!(subscription_type(true, false).requires_delivery_address());
        assert!(subscription_type(false, true).requires_delivery_address());
        assert!(subscription_type(true, true).requires_delivery_address());
        assert!(!subscription_type(false, false).requires_delivery_address());
    }
}
