// src/repository/payment_repository.rs

use crate::db::DbPool;
use crate::domain::payment_model::{self, Column, Entity as PaymentEntity};
use crate::error::AppResult;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

pub struct PaymentRepository {
    db: DbPool,
}

impl PaymentRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 支払いをvariable symbolで検索
    pub async fn find_by_variable_symbol(
        &self,
        variable_symbol: &str,
    ) -> AppResult<Option<payment_model::Model>> {
        let payment = PaymentEntity::find()
            .filter(Column::VariableSymbol.eq(variable_symbol))
            .one(&self.db)
            .await?;

        Ok(payment)
    }
}
