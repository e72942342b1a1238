// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                eprintln!("Database error: {:?}", db_err); // サーバーログには詳細を出す

                let status = match db_err {
                    sea_orm::DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                // クライアントへのエラーメッセージをより具体的に
                let (message, details) = match &db_err {
                    sea_orm::DbErr::RecordNotFound(entity) => (
                        "The requested resource was not found".to_string(),
                        Some(json!({ "entity": entity })),
                    ),
                    sea_orm::DbErr::Exec(_msg) => (
                        "A database operation failed".to_string(),
                        Some(json!({ "operation": "exec", "hint": "Check database connection" })),
                    ),
                    sea_orm::DbErr::Query(_msg) => (
                        "A database query failed".to_string(),
                        Some(json!({ "operation": "query", "hint": "Check query syntax" })),
                    ),
                    _ => ("A database error occurred".to_string(), None),
                };

                (
                    status,
                    ErrorResponse {
                        success: false,
                        error: message.clone(),
                        message,
                        details,
                        validation_errors: None,
                        error_type: "database_error".to_string(),
                    },
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    success: false,
                    error: message.clone(),
                    message,
                    details: None,
                    validation_errors: None,
                    error_type: "not_found".to_string(),
                },
            ),
            AppError::ValidationErrors(errors) => {
                // "field: reason" 形式のエントリをフィールド別に集約する
                let mut field_errors = HashMap::new();
                for error in &errors {
                    if let Some((field, message)) = error.split_once(": ") {
                        field_errors
                            .entry(field.to_string())
                            .or_insert_with(Vec::new)
                            .push(message.to_string());
                    }
                }
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: "Validation failed".to_string(),
                        message: "Validation failed".to_string(),
                        details: None,
                        validation_errors: Some(field_errors),
                        error_type: "validation_errors".to_string(),
                    },
                )
            }
            AppError::ValidationFailure(errors) => {
                let field_errors: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: "Validation failed".to_string(),
                        message: "Validation failed".to_string(),
                        details: None,
                        validation_errors: Some(field_errors),
                        error_type: "validation_errors".to_string(),
                    },
                )
            }
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    success: false,
                    error: message.clone(),
                    message,
                    details: None,
                    validation_errors: None,
                    error_type: "conflict".to_string(),
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    pub error_type: String,
}
