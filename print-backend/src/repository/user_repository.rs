// src/repository/user_repository.rs

use crate::db::DbPool;
use crate::domain::user_model::{self, Entity as UserEntity};
use crate::error::AppResult;
use sea_orm::EntityTrait;
use uuid::Uuid;

#[derive(Debug)]
pub struct UserRepository {
    db: DbPool,
}

impl UserRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// ユーザーをIDで検索
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<user_model::Model>> {
        Ok(UserEntity::find_by_id(id).one(&self.db).await?)
    }
}
