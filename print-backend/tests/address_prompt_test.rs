// tests/address_prompt_test.rs

mod common;

use common::test_data;
use print_backend::api::widget::{EnterAddressWidget, Fragment};
use print_backend::domain::{address_model, subscription_model, subscription_type_model};
use print_backend::service::address_prompt_service::AddressPromptService;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_should_prompt_false_without_active_subscription() {
    // 有効なサブスクリプションが存在しない
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<subscription_model::Model>::new()])
        .into_connection();
    let service = AddressPromptService::new(db.clone());

    let result = service.should_prompt(Uuid::new_v4()).await.unwrap();

    assert!(!result);

    // サブスクリプションの検索以外のクエリは発行されない
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_should_prompt_false_without_print_flags() {
    let user = test_data::create_test_user();
    let subscription_type = test_data::create_test_subscription_type(false, false);
    let subscription = test_data::create_active_subscription(user.id, subscription_type.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([vec![subscription_type]])
        .into_connection();
    let service = AddressPromptService::new(db.clone());

    let result = service.should_prompt(user.id).await.unwrap();

    assert!(!result);

    // 紙面配送を含まない場合、住所の検索まで進まない
    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn test_should_prompt_false_with_existing_print_address() {
    let user = test_data::create_test_user();
    let subscription_type = test_data::create_test_subscription_type(true, false);
    let subscription = test_data::create_active_subscription(user.id, subscription_type.id);
    let address = test_data::create_test_print_address(user.id, Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([vec![subscription_type]])
        .append_query_results([vec![address]])
        .into_connection();
    let service = AddressPromptService::new(db);

    let result = service.should_prompt(user.id).await.unwrap();

    assert!(!result);
}

#[tokio::test]
async fn test_should_prompt_true_without_print_address() {
    let user = test_data::create_test_user();
    let subscription_type = test_data::create_test_subscription_type(true, false);
    let subscription = test_data::create_active_subscription(user.id, subscription_type.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([vec![subscription_type]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .into_connection();
    let service = AddressPromptService::new(db);

    let result = service.should_prompt(user.id).await.unwrap();

    assert!(result);
}

#[tokio::test]
async fn test_should_prompt_true_with_print_friday_only() {
    let user = test_data::create_test_user();
    let subscription_type = test_data::create_test_subscription_type(false, true);
    let subscription = test_data::create_active_subscription(user.id, subscription_type.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([vec![subscription_type]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .into_connection();
    let service = AddressPromptService::new(db);

    let result = service.should_prompt(user.id).await.unwrap();

    assert!(result);
}

#[tokio::test]
async fn test_widget_renders_only_when_prompt_needed() {
    let user = test_data::create_test_user();
    let subscription_type = test_data::create_test_subscription_type(true, false);
    let subscription = test_data::create_active_subscription(user.id, subscription_type.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([vec![subscription_type]])
        .append_query_results([Vec::<address_model::Model>::new()])
        .into_connection();
    let service = Arc::new(AddressPromptService::new(db));

    let widget = EnterAddressWidget::new(service, user.id);

    assert!(widget.should_render().await.unwrap());

    let content = widget.render();
    assert_eq!(content.widget, EnterAddressWidget::IDENTIFIER);
    assert!(!content.message.is_empty());
}

#[tokio::test]
async fn test_widget_does_not_render_without_subscription() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<subscription_model::Model>::new()])
        .into_connection();
    let service = Arc::new(AddressPromptService::new(db));

    let widget = EnterAddressWidget::new(service, Uuid::new_v4());

    assert!(!widget.should_render().await.unwrap());
}

#[tokio::test]
async fn test_should_prompt_surfaces_missing_subscription_type_as_error() {
    let user = test_data::create_test_user();
    let subscription = test_data::create_active_subscription(user.id, Uuid::new_v4());

    // サブスクリプションはあるが種別が見つからない（整合性エラー）
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![subscription]])
        .append_query_results([Vec::<subscription_type_model::Model>::new()])
        .into_connection();
    let service = AddressPromptService::new(db);

    let result = service.should_prompt(user.id).await;

    assert!(result.is_err());
}
