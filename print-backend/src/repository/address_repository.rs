// src/repository/address_repository.rs

use crate::db::DbPool;
use crate::domain::address_model::{self, Column, Entity as AddressEntity};
use crate::error::AppResult;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct AddressRepository {
    db: DbPool,
}

impl AddressRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// ユーザーの指定タイプの現住所を取得
    ///
    /// (user_id, address_type) ごとに現住所は最大1件。
    pub async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        address_type: &str,
    ) -> AppResult<Option<address_model::Model>> {
        let address = AddressEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AddressType.eq(address_type))
            .one(&self.db)
            .await?;

        Ok(address)
    }
}
