// src/domain/country_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub iso_code: String,

    /// 国リストの表示順（小さいほど先頭）
    pub sorting: i32,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::address_model::Entity")]
    Addresses,
}

impl Related<super::address_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 国選択フォームの選択肢（id, 表示名）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub id: Uuid,
    pub label: String,
}

impl From<Model> for CountryOption {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            label: model.name,
        }
    }
}
