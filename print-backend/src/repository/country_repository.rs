// src/repository/country_repository.rs

use crate::db::DbPool;
use crate::domain::country_model::{Column, CountryOption, Entity};
use crate::error::AppResult;
use sea_orm::{EntityTrait, QueryOrder};

pub struct CountryRepository {
    db: DbPool,
    default_country_iso: String,
}

impl CountryRepository {
    pub fn new(db: DbPool, default_country_iso: String) -> Self {
        Self {
            db,
            default_country_iso,
        }
    }

    /// 国選択フォーム用の選択肢を取得
    ///
    /// ソートキー順に並べ、デフォルトの国を先頭に移動する。
    pub async fn get_default_country_options(&self) -> AppResult<Vec<CountryOption>> {
        let countries = Entity::find()
            .order_by_asc(Column::Sorting)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        let (default, rest): (Vec<_>, Vec<_>) = countries
            .into_iter()
            .partition(|c| c.iso_code == self.default_country_iso);

        let options = default
            .into_iter()
            .chain(rest)
            .map(CountryOption::from)
            .collect();

        Ok(options)
    }
}
