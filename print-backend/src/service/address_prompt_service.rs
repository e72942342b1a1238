// src/service/address_prompt_service.rs

use crate::db::DbPool;
use crate::domain::address_model::ADDRESS_TYPE_PRINT;
use crate::error::{AppError, AppResult};
use crate::repository::address_repository::AddressRepository;
use crate::repository::subscription_repository::SubscriptionRepository;
use std::sync::Arc;
use uuid::Uuid;

/// 配送先住所の入力を促すかどうかの判定
///
/// 読み取り専用で副作用はない。サブスクリプションや住所が存在しない
/// ことは通常の分岐であり、エラーにはならない。
#[derive(Clone)]
pub struct AddressPromptService {
    subscription_repo: Arc<SubscriptionRepository>,
    address_repo: Arc<AddressRepository>,
}

impl AddressPromptService {
    pub fn new(db: DbPool) -> Self {
        let subscription_repo = Arc::new(SubscriptionRepository::new(db.clone()));
        let address_repo = Arc::new(AddressRepository::new(db));

        Self {
            subscription_repo,
            address_repo,
        }
    }

    /// ユーザーに配送先住所の入力を促すべきかを判定
    ///
    /// 紙面配送を含むサブスクリプションが有効で、かつprint住所が
    /// 未登録の場合のみtrueを返す。
    pub async fn should_prompt(&self, user_id: Uuid) -> AppResult<bool> {
        // 有効なサブスクリプションがなければ何も促さない
        let Some(subscription) = self
            .subscription_repo
            .find_active_by_user_id(user_id)
            .await?
        else {
            return Ok(false);
        };

        let subscription_type = self
            .subscription_repo
            .find_type_by_id(subscription.subscription_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Subscription type {} not found",
                    subscription.subscription_type_id
                ))
            })?;

        if !subscription_type.requires_delivery_address() {
            return Ok(false);
        }

        // 既にprint住所が登録されていれば促さない
        let existing_address = self
            .address_repo
            .find_by_user_and_type(user_id, ADDRESS_TYPE_PRINT)
            .await?;

        Ok(existing_address.is_none())
    }
}
