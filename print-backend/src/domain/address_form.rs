// src/domain/address_form.rs

use super::{address_model, payment_model};
use serde::{Deserialize, Serialize};

/// フォームフィールドの種類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Select { options: Vec<SelectOption> },
}

/// 選択フィールドの選択肢
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// フォームの1フィールド
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    pub value: Option<String>,
}

impl FormField {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            required: false,
            value: None,
        }
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select { options },
            required: false,
            value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }
}

/// クライアントに返す住所入力フォームの記述
///
/// variable_symbol は支払いとの相関トークンとして埋め込まれ、
/// done は送信時点で住所が既に存在していたかどうかの表示層向けヒント。
/// どちらもサーバー側で検証されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub fields: Vec<FormField>,

    #[serde(rename = "VS")]
    pub variable_symbol: String,

    pub done: bool,
}

impl FormDescriptor {
    pub fn new(variable_symbol: impl Into<String>, done: bool) -> Self {
        Self {
            fields: Vec::new(),
            variable_symbol: variable_symbol.into(),
            done,
        }
    }

    /// フィールドを末尾に追加
    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// フィールドを名前で取得
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// フィールドの事前入力値を取得
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.value.as_deref())
    }
}

/// フォーム拡張に渡されるコンテキスト
pub struct AddressFormContext<'a> {
    pub form: FormDescriptor,
    pub payment: &'a payment_model::Model,
    pub existing_address: Option<&'a address_model::Model>,
}

/// 住所入力フォームへの拡張ポイント
///
/// 起動時に登録された順に適用され、それぞれが（変更した）フォームを
/// 次の拡張へ返す。
pub trait AddressFormExtension: Send + Sync {
    fn provide(&self, ctx: AddressFormContext<'_>) -> FormDescriptor;
}
