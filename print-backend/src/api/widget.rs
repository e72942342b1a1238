// src/api/widget.rs

use crate::error::AppResult;
use crate::service::address_prompt_service::AddressPromptService;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// 条件付きで描画されるページ断片
///
/// should_render がfalseを返した場合、表示層は何も描画しない。
/// 描画判定のロジックはコンポジションで注入する。
#[async_trait]
pub trait Fragment {
    type Content: Serialize;

    async fn should_render(&self) -> AppResult<bool>;

    fn render(&self) -> Self::Content;
}

/// 配送先住所の入力を促すウィジェット
pub struct EnterAddressWidget {
    prompt_service: Arc<AddressPromptService>,
    user_id: Uuid,
}

impl EnterAddressWidget {
    pub const IDENTIFIER: &'static str = "enter_address";

    pub fn new(prompt_service: Arc<AddressPromptService>, user_id: Uuid) -> Self {
        Self {
            prompt_service,
            user_id,
        }
    }
}

/// ウィジェットの描画内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterAddressContent {
    pub widget: String,
    pub message: String,
}

#[async_trait]
impl Fragment for EnterAddressWidget {
    type Content = EnterAddressContent;

    async fn should_render(&self) -> AppResult<bool> {
        self.prompt_service.should_prompt(self.user_id).await
    }

    fn render(&self) -> EnterAddressContent {
        EnterAddressContent {
            widget: Self::IDENTIFIER.to_string(),
            message: "Your subscription includes the print edition. Please enter your delivery \
                      address."
                .to_string(),
        }
    }
}
