// src/utils/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// 郵便番号用正規表現（5桁、スペース区切り可: "11000" / "110 00"）
pub static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}\s?\d{2}$").unwrap());

/// 電話番号用正規表現（国際プレフィックス任意、数字とスペースのみ）
pub static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ]{5,18}$").unwrap());

/// 郵便番号バリデーション
pub fn validate_zip(zip: &str) -> Result<(), ValidationError> {
    if ZIP_REGEX.is_match(zip) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_zip"))
    }
}

/// 電話番号バリデーション
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if PHONE_NUMBER_REGEX.is_match(phone_number) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number"))
    }
}
