// tests/print_address_form_test.rs

mod common;

use common::test_data;
use print_backend::domain::address_form::{
    AddressFormContext, AddressFormExtension, FormDescriptor, FormField,
};
use print_backend::domain::{address_model, payment_model};
use print_backend::error::AppError;
use print_backend::service::print_address_service::{PrintAddressService, SubmitOutcome};
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

const VS: &str = "7001122334";

fn default_countries() -> Vec<print_backend::domain::country_model::Model> {
    vec![
        test_data::create_test_country("AT", "Austria", 5),
        test_data::create_test_country("CZ", "Czech Republic", 10),
        test_data::create_test_country("SK", "Slovakia", 20),
    ]
}

// --- build_form ---

#[tokio::test]
async fn test_build_form_prefills_all_fields_from_existing_address() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);
    let address = test_data::create_test_print_address(user.id, Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user]])
        .append_query_results([vec![address.clone()]])
        .append_query_results([default_countries()])
        .into_connection();
    let service = PrintAddressService::new(db, "CZ".to_string());

    let form = service.build_form(VS).await.unwrap();

    // 既存住所があれば全フィールドが事前入力される
    assert_eq!(form.field_value("first_name"), Some(address.first_name.as_str()));
    assert_eq!(form.field_value("last_name"), Some(address.last_name.as_str()));
    assert_eq!(
        form.field_value("phone_number"),
        address.phone_number.as_deref()
    );
    assert_eq!(form.field_value("address"), Some(address.street.as_str()));
    assert_eq!(form.field_value("number"), Some(address.number.as_str()));
    assert_eq!(form.field_value("zip"), Some(address.zip.as_str()));
    assert_eq!(form.field_value("city"), Some(address.city.as_str()));

    // 相関トークンと住所既存フラグ
    assert_eq!(form.variable_symbol, VS);
    assert!(form.done);
}

#[tokio::test]
async fn test_build_form_prefills_only_names_without_address() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user.clone()]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .append_query_results([default_countries()])
        .into_connection();
    let service = PrintAddressService::new(db, "CZ".to_string());

    let form = service.build_form(VS).await.unwrap();

    // 氏名はユーザー情報から事前入力される
    assert_eq!(form.field_value("first_name"), user.first_name.as_deref());
    assert_eq!(form.field_value("last_name"), user.last_name.as_deref());

    // 残りのフィールドは空
    assert_eq!(form.field_value("phone_number"), None);
    assert_eq!(form.field_value("address"), None);
    assert_eq!(form.field_value("number"), None);
    assert_eq!(form.field_value("zip"), None);
    assert_eq!(form.field_value("city"), None);

    assert!(!form.done);
}

#[tokio::test]
async fn test_build_form_puts_default_country_first() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .append_query_results([default_countries()])
        .into_connection();
    let service = PrintAddressService::new(db, "CZ".to_string());

    let form = service.build_form(VS).await.unwrap();

    let country_field = form.field("country_id").unwrap();
    assert!(country_field.required);

    match &country_field.kind {
        print_backend::domain::address_form::FieldKind::Select { options } => {
            assert_eq!(options.len(), 3);
            // デフォルトの国がソート順より優先して先頭に来る
            assert_eq!(options[0].label, "Czech Republic");
            assert_eq!(options[1].label, "Austria");
        }
        other => panic!("country_id should be a select field, got {:?}", other),
    }
}

#[tokio::test]
async fn test_build_form_unknown_variable_symbol_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<payment_model::Model>::new()])
        .into_connection();
    let service = PrintAddressService::new(db, "CZ".to_string());

    let err = service.build_form("0000000000").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

/// 指定した名前のフィールドを末尾に追加する拡張
struct AppendFieldExtension(&'static str);

impl AddressFormExtension for AppendFieldExtension {
    fn provide(&self, ctx: AddressFormContext<'_>) -> FormDescriptor {
        ctx.form.add_field(FormField::text(self.0, self.0))
    }
}

#[tokio::test]
async fn test_build_form_applies_extensions_in_registration_order() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .append_query_results([default_countries()])
        .into_connection();

    let extensions: Vec<Arc<dyn AddressFormExtension>> = vec![
        Arc::new(AppendFieldExtension("gift_code")),
        Arc::new(AppendFieldExtension("delivery_note")),
    ];
    let service = PrintAddressService::with_extensions(db, "CZ".to_string(), extensions);

    let form = service.build_form(VS).await.unwrap();

    let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
    let gift_code = names.iter().position(|n| *n == "gift_code").unwrap();
    let delivery_note = names.iter().position(|n| *n == "delivery_note").unwrap();

    // 登録順に適用され、後から登録した拡張のフィールドが後ろに付く
    assert!(gift_code < delivery_note);
    assert_eq!(delivery_note, names.len() - 1);
}

// --- submit ---

#[tokio::test]
async fn test_submit_without_first_name_key_writes_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let service = PrintAddressService::new(db.clone(), "CZ".to_string());

    let mut submission = test_data::create_valid_submission(Uuid::new_v4());
    submission.first_name = None;

    let outcome = service.submit(VS, submission).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Skipped));

    // ストアへの書き込みはもちろん、読み取りすら行われない
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_submit_with_empty_required_field_is_rejected_before_any_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let service = PrintAddressService::new(db.clone(), "CZ".to_string());

    let mut submission = test_data::create_valid_submission(Uuid::new_v4());
    submission.city = Some("".to_string());

    let err = service.submit(VS, submission).await.unwrap_err();

    match err {
        AppError::ValidationErrors(errors) => {
            assert!(errors.contains(&"city: required".to_string()));
        }
        other => panic!("expected validation errors, got {:?}", other),
    }

    // バリデーションで弾かれた送信は変更申請を作成しない
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_submit_with_malformed_zip_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let service = PrintAddressService::new(db.clone(), "CZ".to_string());

    let mut submission = test_data::create_valid_submission(Uuid::new_v4());
    submission.zip = Some("abcde".to_string());

    let err = service.submit(VS, submission).await.unwrap_err();

    match err {
        AppError::ValidationErrors(errors) => {
            assert!(errors.contains(&"zip: invalid format".to_string()));
        }
        other => panic!("expected validation errors, got {:?}", other),
    }

    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_submit_valid_creates_then_accepts_request() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);
    let country_id = Uuid::new_v4();

    // 申請作成と受理でストアが返す行
    let created_request = test_data::create_pending_change_request(user.id, None, country_id);
    let created_address = test_data::create_test_print_address(user.id, country_id);
    let mut accepted_request = created_request.clone();
    accepted_request.status = "accepted".to_string();
    accepted_request.address_id = Some(created_address.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user.clone()]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .append_query_results([vec![created_request]])
        .append_query_results([vec![created_address.clone()]])
        .append_query_results([vec![accepted_request]])
        .into_connection();
    let service = PrintAddressService::new(db.clone(), "CZ".to_string());

    let submission = test_data::create_valid_submission(country_id);
    let outcome = service.submit(VS, submission).await.unwrap();

    match outcome {
        SubmitOutcome::Saved {
            user: saved_user,
            change_request,
            address,
        } => {
            assert_eq!(saved_user.id, user.id);
            assert_eq!(change_request.status, "accepted");
            assert_eq!(change_request.address_id, Some(created_address.id));
            assert_eq!(address.id, created_address.id);
        }
        SubmitOutcome::Skipped => panic!("valid submission should be saved"),
    }

    // 申請のINSERT → 住所のINSERT → 申請のUPDATE の順で実行される
    let statements: Vec<String> = db
        .into_transaction_log()
        .iter()
        .map(|t| format!("{:?}", t))
        .collect();

    assert_eq!(statements.len(), 6);
    assert!(statements[3].contains("INSERT") && statements[3].contains("address_change_requests"));
    assert!(
        statements[4].contains("INSERT")
            && statements[4].contains("addresses")
            && !statements[4].contains("address_change_requests")
    );
    assert!(statements[5].contains("UPDATE") && statements[5].contains("address_change_requests"));

    // 変更申請のINSERTはちょうど1回
    let request_inserts = statements
        .iter()
        .filter(|s| s.contains("INSERT") && s.contains("address_change_requests"))
        .count();
    assert_eq!(request_inserts, 1);
}

#[tokio::test]
async fn test_submit_with_existing_address_updates_it_in_place() {
    let user = test_data::create_test_user();
    let payment = test_data::create_test_payment(user.id, VS);
    let country_id = Uuid::new_v4();
    let existing_address = test_data::create_test_print_address(user.id, country_id);

    let created_request =
        test_data::create_pending_change_request(user.id, Some(existing_address.id), country_id);

    let mut updated_address = existing_address.clone();
    updated_address.street = "Narodni".to_string();
    updated_address.number = "25".to_string();

    let mut accepted_request = created_request.clone();
    accepted_request.status = "accepted".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![payment]])
        .append_query_results([vec![user]])
        .append_query_results([vec![existing_address.clone()]])
        .append_query_results([vec![created_request]])
        .append_query_results([vec![existing_address.clone()]])
        .append_query_results([vec![updated_address]])
        .append_query_results([vec![accepted_request]])
        .into_connection();
    let service = PrintAddressService::new(db.clone(), "CZ".to_string());

    let submission = test_data::create_valid_submission(country_id);
    let outcome = service.submit(VS, submission).await.unwrap();

    match outcome {
        SubmitOutcome::Saved { address, .. } => {
            // 既存住所のidが維持される
            assert_eq!(address.id, existing_address.id);
            assert_eq!(address.street, "Narodni");
        }
        SubmitOutcome::Skipped => panic!("valid submission should be saved"),
    }

    let statements: Vec<String> = db
        .into_transaction_log()
        .iter()
        .map(|t| format!("{:?}", t))
        .collect();

    // 既存住所はUPDATEされ、新規INSERTは行われない
    assert!(statements.iter().any(
        |s| s.contains("UPDATE") && s.contains("addresses") && !s.contains("address_change_requests")
    ));
    assert!(!statements.iter().any(
        |s| s.contains("INSERT") && s.contains("addresses") && !s.contains("address_change_requests")
    ));
}
