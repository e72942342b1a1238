// src/main.rs
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use print_backend::api::handlers::print_address_handler::print_address_router;
use print_backend::api::AppState;
use print_backend::config::Config;
use print_backend::db::create_db_pool;
use print_backend::logging::{inject_request_context, logging_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "print_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Print Address Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env().expect("Failed to load configuration");
    tracing::info!("Configuration loaded: {:?}", app_config);

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database pool created successfully.");

    // マイグレーションを適用
    Migrator::up(&db_pool, None)
        .await
        .expect("Failed to run database migrations");

    // フォーム拡張は現状なし。他モジュールはここで登録する
    let form_extensions = Vec::new();

    let app_state = AppState::new(db_pool, &app_config, form_extensions);

    // ルーターの設定
    let app_router = print_address_router(app_state)
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
