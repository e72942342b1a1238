// src/api/mod.rs
use crate::config::Config;
use crate::db::DbPool;
use crate::domain::address_form::AddressFormExtension;
use crate::service::address_prompt_service::AddressPromptService;
use crate::service::print_address_service::PrintAddressService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod dto;
pub mod handlers;
pub mod widget;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub address_prompt_service: Arc<AddressPromptService>,
    pub print_address_service: Arc<PrintAddressService>,
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// フォーム拡張は起動時にここで登録され、登録順に適用される
    pub fn new(
        db: DbPool,
        config: &Config,
        form_extensions: Vec<Arc<dyn AddressFormExtension>>,
    ) -> Self {
        let address_prompt_service = Arc::new(AddressPromptService::new(db.clone()));
        let print_address_service = Arc::new(PrintAddressService::with_extensions(
            db.clone(),
            config.default_country_iso.clone(),
            form_extensions,
        ));

        Self {
            address_prompt_service,
            print_address_service,
            db: Arc::new(db),
        }
    }
}
