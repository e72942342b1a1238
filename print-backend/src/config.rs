// src/config.rs
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    /// 国選択フォームで先頭に表示するデフォルトの国
    pub default_country_iso: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let database_url = env::var("DATABASE_URL")?;
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let default_country_iso =
            env::var("DEFAULT_COUNTRY_ISO").unwrap_or_else(|_| "CZ".to_string());

        Ok(Config {
            database_url,
            server_addr,
            default_country_iso,
        })
    }
}
