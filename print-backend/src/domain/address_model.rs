// src/domain/address_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 配送先住所の住所タイプ
pub const ADDRESS_TYPE_PRINT: &str = "print";

/// 住所エンティティ
///
/// (user_id, address_type) ごとに現住所は最大1件。住所の変更は
/// 住所変更申請（address_change_request）の受理によってのみ行われる。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub address_type: String,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(nullable)]
    pub phone_number: Option<String>,

    pub street: String,

    pub number: String,

    pub city: String,

    pub zip: String,

    pub country_id: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::country_model::Entity",
        from = "Column::CountryId",
        to = "super::country_model::Column::Id"
    )]
    Country,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::country_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            // 更新の場合のみ updated_at を更新
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}
