// src/domain/address_change_request_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 住所変更申請の状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressChangeRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl AddressChangeRequestStatus {
    /// 文字列からAddressChangeRequestStatusに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// AddressChangeRequestStatusを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// 未処理の申請かチェック
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// 処理済み（終端状態）かチェック
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// 有効な状態遷移かチェック
    pub fn can_transition_to(&self, new_status: Self) -> bool {
        match (self, new_status) {
            // 未処理の申請は受理・却下できる
            (Self::Pending, Self::Accepted | Self::Rejected) => true,

            // 処理済みの申請は変更できない
            _ => false,
        }
    }
}

impl Default for AddressChangeRequestStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for AddressChangeRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// データベースとの変換用
impl From<AddressChangeRequestStatus> for String {
    fn from(status: AddressChangeRequestStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TryFrom<&str> for AddressChangeRequestStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
            .ok_or_else(|| format!("Invalid address change request status: '{}'", value))
    }
}
