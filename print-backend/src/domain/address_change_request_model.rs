// src/domain/address_change_request_model.rs

use super::address_change_request_status::AddressChangeRequestStatus;
use super::address_model;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 住所変更申請エンティティ
///
/// 現住所（Address）とは別の、監査可能な変更提案。受理されると
/// 提案内容が現住所に反映される。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address_change_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    #[sea_orm(nullable)]
    pub address_id: Option<Uuid>,

    pub address_type: String,

    pub status: String,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(nullable)]
    pub phone_number: Option<String>,

    pub street: String,

    pub number: String,

    pub city: String,

    pub zip: String,

    pub country_id: Uuid,

    // 請求先住所バリアント用のカラム。printタイプの申請では常にnull
    #[sea_orm(nullable)]
    pub company_name: Option<String>,

    #[sea_orm(nullable)]
    pub company_id: Option<String>,

    #[sea_orm(nullable)]
    pub company_tax_id: Option<String>,

    #[sea_orm(nullable)]
    pub company_vat_id: Option<String>,

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
        belongs_to = "super::address_model::Entity",
        from = "Column::AddressId",
        to = "super::address_model::Column::Id"
    )]
    Address,

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

impl Related<super::address_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
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
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

/// 住所変更申請の作成入力
#[derive(Debug, Clone)]
pub struct NewAddressChangeRequest {
    pub user_id: Uuid,
    pub address_id: Option<Uuid>,
    pub address_type: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub street: String,
    pub number: String,
    pub city: String,
    pub zip: String,
    pub country_id: Uuid,
    pub company_name: Option<String>,
    pub company_id: Option<String>,
    pub company_tax_id: Option<String>,
    pub company_vat_id: Option<String>,
}

impl Model {
    /// 新しい住所変更申請を作成（状態はpending）
    #[allow(clippy::new_ret_no_self)]
    pub fn new(new: NewAddressChangeRequest) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            address_id: Set(new.address_id),
            address_type: Set(new.address_type),
            status: Set(AddressChangeRequestStatus::Pending.to_string()),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            phone_number: Set(new.phone_number),
            street: Set(new.street),
            number: Set(new.number),
            city: Set(new.city),
            zip: Set(new.zip),
            country_id: Set(new.country_id),
            company_name: Set(new.company_name),
            company_id: Set(new.company_id),
            company_tax_id: Set(new.company_tax_id),
            company_vat_id: Set(new.company_vat_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
    }

    /// 申請の状態をenumとして取得
    pub fn status(&self) -> Option<AddressChangeRequestStatus> {
        AddressChangeRequestStatus::from_str(&self.status)
    }

    /// 提案内容から新しい住所レコードを組み立てる（既存住所がない場合）
    pub fn build_address(&self) -> address_model::ActiveModel {
        address_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(self.user_id),
            address_type: Set(self.address_type.clone()),
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
            phone_number: Set(self.phone_number.clone()),
            street: Set(self.street.clone()),
            number: Set(self.number.clone()),
            city: Set(self.city.clone()),
            zip: Set(self.zip.clone()),
            country_id: Set(self.country_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
    }

    /// 提案内容を既存住所に反映する
    pub fn apply_to(&self, address: address_model::Model) -> address_model::ActiveModel {
        let mut active: address_model::ActiveModel = address.into();
        active.first_name = Set(self.first_name.clone());
        active.last_name = Set(self.last_name.clone());
        active.phone_number = Set(self.phone_number.clone());
        active.street = Set(self.street.clone());
        active.number = Set(self.number.clone());
        active.city = Set(self.city.clone());
        active.zip = Set(self.zip.clone());
        active.country_id = Set(self.country_id);
        active
    }
}
