// src/repository/address_change_request_repository.rs

use crate::db::DbPool;
use crate::domain::address_change_request_model::{self, NewAddressChangeRequest};
use crate::domain::address_change_request_status::AddressChangeRequestStatus;
use crate::domain::address_model::{self, Entity as AddressEntity};
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

pub struct AddressChangeRequestRepository {
    db: DbPool,
}

impl AddressChangeRequestRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 住所変更申請を作成（状態はpending）
    pub async fn add(
        &self,
        new: NewAddressChangeRequest,
    ) -> AppResult<address_change_request_model::Model> {
        let request = address_change_request_model::Model::new(new);

        let created_request = request.insert(&self.db).await?;

        Ok(created_request)
    }

    /// 住所変更申請を受理し、提案内容を現住所に反映する
    ///
    /// 既存住所（address_id）があればそれを上書きし、なければ新規作成する。
    /// pending以外の申請は受理できない。
    pub async fn accept(
        &self,
        request: address_change_request_model::Model,
    ) -> AppResult<(address_change_request_model::Model, address_model::Model)> {
        match request.status() {
            Some(status) if status.is_pending() => {}
            _ => {
                return Err(AppError::Conflict(format!(
                    "Address change request {} has already been processed",
                    request.id
                )));
            }
        }

        let address = match request.address_id {
            Some(address_id) => {
                let existing = AddressEntity::find_by_id(address_id)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!(
                            "Address {} referenced by change request not found",
                            address_id
                        ))
                    })?;

                request.apply_to(existing).update(&self.db).await?
            }
            None => request.build_address().insert(&self.db).await?,
        };

        // 申請を受理済みにし、作成・更新された住所に紐付ける
        let mut accepted: address_change_request_model::ActiveModel = request.into();
        accepted.status = Set(AddressChangeRequestStatus::Accepted.to_string());
        accepted.address_id = Set(Some(address.id));
        accepted.updated_at = Set(Utc::now());

        let accepted_request = accepted.update(&self.db).await?;

        Ok((accepted_request, address))
    }
}
