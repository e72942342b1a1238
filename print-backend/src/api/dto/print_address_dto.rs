// src/api/dto/print_address_dto.rs
use crate::domain::address_change_request_model;
use crate::domain::address_model;
use crate::service::print_address_service::SubmitOutcome;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

/// 住所入力フォームの送信内容
///
/// すべてのフィールドは任意。キーが存在しないことと空文字は区別され、
/// first_nameキーを持たない送信は対象外として無視される。必須チェックは
/// サービス層で行う。
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct AddressFormSubmission {
    #[validate(length(max = 255, message = "First name must be 255 characters or less"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be 255 characters or less"))]
    pub last_name: Option<String>,

    #[validate(length(max = 30, message = "Phone number must be 30 characters or less"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 255, message = "Street must be 255 characters or less"))]
    pub address: Option<String>,

    #[validate(length(max = 20, message = "House number must be 20 characters or less"))]
    pub number: Option<String>,

    #[validate(length(max = 10, message = "ZIP code must be 10 characters or less"))]
    pub zip: Option<String>,

    #[validate(length(max = 255, message = "City must be 255 characters or less"))]
    pub city: Option<String>,

    pub country_id: Option<String>,
}

// --- Response DTOs ---

/// 受理済みの住所変更申請の概要
#[derive(Serialize, Deserialize, Debug)]
pub struct AddressChangeRequestDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub address_id: Option<Uuid>,
    pub address_type: String,
    pub status: String,
}

impl From<address_change_request_model::Model> for AddressChangeRequestDto {
    fn from(model: address_change_request_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            address_id: model.address_id,
            address_type: model.address_type,
            status: model.status,
        }
    }
}

/// 現住所の概要
#[derive(Serialize, Deserialize, Debug)]
pub struct AddressDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub address_type: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub street: String,
    pub number: String,
    pub city: String,
    pub zip: String,
    pub country_id: Uuid,
}

impl From<address_model::Model> for AddressDto {
    fn from(model: address_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            address_type: model.address_type,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            street: model.street,
            number: model.number,
            city: model.city,
            zip: model.zip,
            country_id: model.country_id,
        }
    }
}

/// 送信処理の結果
#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitAddressResponse {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_request: Option<AddressChangeRequestDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
}

impl From<SubmitOutcome> for SubmitAddressResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Saved {
                change_request,
                address,
                ..
            } => Self {
                saved: true,
                change_request: Some(change_request.into()),
                address: Some(address.into()),
            },
            SubmitOutcome::Skipped => Self {
                saved: false,
                change_request: None,
                address: None,
            },
        }
    }
}
