// src/api/handlers/print_address_handler.rs
use crate::api::dto::print_address_dto::{AddressFormSubmission, SubmitAddressResponse};
use crate::api::widget::{EnterAddressContent, EnterAddressWidget, Fragment};
use crate::api::AppState;
use crate::domain::address_form::FormDescriptor;
use crate::error::{AppError, AppResult};
use crate::service::print_address_service::SubmitOutcome;
use crate::types::ApiResponse;
use axum::{
    extract::{FromRequestParts, Json, Path, State},
    http::request::Parts,
    routing::get,
    Router,
};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

// カスタムUUID抽出器
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // パスパラメータを文字列として最初に抽出
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationErrors(vec!["Invalid path parameter".to_string()]))?;

        // UUIDをパースして検証エラー形式で返す
        let uuid = Uuid::parse_str(&path_str).map_err(|_| {
            AppError::ValidationErrors(vec![format!("Invalid UUID format: '{}'", path_str)])
        })?;

        Ok(UuidPath(uuid))
    }
}

// --- Handler Functions ---

/// 住所入力を促すウィジェットの描画内容を取得
///
/// 描画条件を満たさない場合は data: null を返し、表示層は何も描画しない。
pub async fn get_address_prompt_handler(
    State(app_state): State<AppState>,
    UuidPath(user_id): UuidPath,
) -> AppResult<ApiResponse<Option<EnterAddressContent>>> {
    let widget = EnterAddressWidget::new(app_state.address_prompt_service.clone(), user_id);

    if widget.should_render().await? {
        info!(user_id = %user_id, "Enter address widget rendered");
        Ok(ApiResponse::success(Some(widget.render())))
    } else {
        Ok(ApiResponse::success(None))
    }
}

/// 支払いに紐付く住所入力フォームの記述を取得
pub async fn get_address_form_handler(
    State(app_state): State<AppState>,
    Path(variable_symbol): Path<String>,
) -> AppResult<ApiResponse<FormDescriptor>> {
    info!(
        variable_symbol = %variable_symbol,
        "Building print address form"
    );

    let form = app_state
        .print_address_service
        .build_form(&variable_symbol)
        .await?;

    Ok(ApiResponse::success(form))
}

/// 住所入力フォームの送信を処理
pub async fn submit_address_form_handler(
    State(app_state): State<AppState>,
    Path(variable_symbol): Path<String>,
    Json(payload): Json<AddressFormSubmission>,
) -> AppResult<ApiResponse<SubmitAddressResponse>> {
    // 形式バリデーション（フィールド長）。必須チェックはサービス層で行う
    payload.validate().map_err(|validation_errors| {
        warn!(
            variable_symbol = %variable_symbol,
            "Address submission validation failed: {}",
            validation_errors
        );
        AppError::ValidationFailure(validation_errors)
    })?;

    let outcome = app_state
        .print_address_service
        .submit(&variable_symbol, payload)
        .await?;

    match &outcome {
        SubmitOutcome::Saved { user, .. } => {
            info!(
                user_id = %user.id,
                variable_symbol = %variable_symbol,
                "Print address submission saved"
            );
        }
        SubmitOutcome::Skipped => {
            info!(
                variable_symbol = %variable_symbol,
                "Print address submission skipped"
            );
        }
    }

    Ok(ApiResponse::success(outcome.into()))
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn print_address_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/users/{user_id}/print-address-prompt",
            get(get_address_prompt_handler),
        )
        .route(
            "/print/address-form/{vs}",
            get(get_address_form_handler).post(submit_address_form_handler),
        )
        // ヘルスチェックエンドポイント
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
