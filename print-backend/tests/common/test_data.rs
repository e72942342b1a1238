// tests/common/test_data.rs

use chrono::{Duration, Utc};
use print_backend::api::dto::print_address_dto::AddressFormSubmission;
use print_backend::domain::{
    address_change_request_model, address_model, country_model, payment_model, subscription_model,
    subscription_type_model, user_model,
};
use uuid::Uuid;

// === ユーザー・サブスクリプション関連のテストデータ ===

/// テスト用のユーザーを生成
pub fn create_test_user() -> user_model::Model {
    user_model::Model {
        id: Uuid::new_v4(),
        email: format!("test{}@example.com", Uuid::new_v4()),
        first_name: Some("Jana".to_string()),
        last_name: Some("Novakova".to_string()),
        invoice: false,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// テスト用のサブスクリプション種別を生成
pub fn create_test_subscription_type(print: bool, print_friday: bool) -> subscription_type_model::Model {
    subscription_type_model::Model {
        id: Uuid::new_v4(),
        name: "Print Daily".to_string(),
        code: format!("print_daily_{}", Uuid::new_v4()),
        print,
        print_friday,
        created_at: Utc::now(),
    }
}

/// 現在有効なサブスクリプションを生成
pub fn create_active_subscription(
    user_id: Uuid,
    subscription_type_id: Uuid,
) -> subscription_model::Model {
    subscription_model::Model {
        id: Uuid::new_v4(),
        user_id,
        subscription_type_id,
        start_time: Utc::now() - Duration::days(7),
        end_time: Utc::now() + Duration::days(23),
        created_at: Utc::now() - Duration::days(7),
    }
}

/// テスト用の支払いを生成
pub fn create_test_payment(user_id: Uuid, variable_symbol: &str) -> payment_model::Model {
    payment_model::Model {
        id: Uuid::new_v4(),
        user_id,
        variable_symbol: variable_symbol.to_string(),
        status: "paid".to_string(),
        created_at: Utc::now(),
    }
}

// === 住所関連のテストデータ ===

/// テスト用の国を生成
pub fn create_test_country(iso_code: &str, name: &str, sorting: i32) -> country_model::Model {
    country_model::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        iso_code: iso_code.to_string(),
        sorting,
        created_at: Utc::now(),
    }
}

/// テスト用のprint住所を生成
pub fn create_test_print_address(user_id: Uuid, country_id: Uuid) -> address_model::Model {
    address_model::Model {
        id: Uuid::new_v4(),
        user_id,
        address_type: "print".to_string(),
        first_name: "Pavel".to_string(),
        last_name: "Svoboda".to_string(),
        phone_number: Some("+420777888999".to_string()),
        street: "Vodickova".to_string(),
        number: "36".to_string(),
        city: "Praha".to_string(),
        zip: "11000".to_string(),
        country_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// pendingの住所変更申請を生成
pub fn create_pending_change_request(
    user_id: Uuid,
    address_id: Option<Uuid>,
    country_id: Uuid,
) -> address_change_request_model::Model {
    address_change_request_model::Model {
        id: Uuid::new_v4(),
        user_id,
        address_id,
        address_type: "print".to_string(),
        status: "pending".to_string(),
        first_name: "Jana".to_string(),
        last_name: "Novakova".to_string(),
        phone_number: Some("+420123456789".to_string()),
        street: "Narodni".to_string(),
        number: "25".to_string(),
        city: "Praha".to_string(),
        zip: "11000".to_string(),
        country_id,
        company_name: None,
        company_id: None,
        company_tax_id: None,
        company_vat_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// === フォーム送信のテストデータ ===

/// すべての必須フィールドが埋まった送信内容を生成
pub fn create_valid_submission(country_id: Uuid) -> AddressFormSubmission {
    AddressFormSubmission {
        first_name: Some("Jana".to_string()),
        last_name: Some("Novakova".to_string()),
        phone_number: Some("+420123456789".to_string()),
        address: Some("Narodni".to_string()),
        number: Some("25".to_string()),
        zip: Some("11000".to_string()),
        city: Some("Praha".to_string()),
        country_id: Some(country_id.to_string()),
    }
}
