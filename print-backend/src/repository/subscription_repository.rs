// src/repository/subscription_repository.rs

use crate::db::DbPool;
use crate::domain::subscription_model::{self, Column, Entity as SubscriptionEntity};
use crate::domain::subscription_type_model::{self, Entity as SubscriptionTypeEntity};
use crate::error::AppResult;
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct SubscriptionRepository {
    db: DbPool,
}

impl SubscriptionRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// ユーザーの現在有効なサブスクリプションを取得
    ///
    /// 有効 = start_time <= now < end_time。複数該当する場合は
    /// 最も新しく開始したものを返す。
    pub async fn find_active_by_user_id(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<subscription_model::Model>> {
        let now = Utc::now();

        let subscription = SubscriptionEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::StartTime.lte(now))
            .filter(Column::EndTime.gt(now))
            .order_by_desc(Column::StartTime)
            .one(&self.db)
            .await?;

        Ok(subscription)
    }

    /// サブスクリプション種別をIDで取得
    pub async fn find_type_by_id(
        &self,
        id: Uuid,
    ) -> AppResult<Option<subscription_type_model::Model>> {
        Ok(SubscriptionTypeEntity::find_by_id(id).one(&self.db).await?)
    }
}
