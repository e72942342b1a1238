// src/service/print_address_service.rs

use crate::api::dto::print_address_dto::AddressFormSubmission;
use crate::db::DbPool;
use crate::domain::address_change_request_model::{self, NewAddressChangeRequest};
use crate::domain::address_form::{
    AddressFormContext, AddressFormExtension, FormDescriptor, FormField, SelectOption,
};
use crate::domain::address_model::{self, ADDRESS_TYPE_PRINT};
use crate::domain::{payment_model, user_model};
use crate::error::{AppError, AppResult};
use crate::repository::address_change_request_repository::AddressChangeRequestRepository;
use crate::repository::address_repository::AddressRepository;
use crate::repository::country_repository::CountryRepository;
use crate::repository::payment_repository::PaymentRepository;
use crate::repository::user_repository::UserRepository;
use crate::utils::validation;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// submitの結果
///
/// 元の実装ではコールバックで後続処理へ通知していたが、呼び出し側が
/// 次の処理を決められるよう明示的な結果型として返す。
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 変更申請が作成・受理され、住所が反映された
    Saved {
        user: user_model::Model,
        change_request: address_change_request_model::Model,
        address: address_model::Model,
    },
    /// first_nameキーを持たない送信は対象外として無視された
    Skipped,
}

/// バリデーション済みの送信内容
struct ValidatedSubmission {
    first_name: String,
    last_name: String,
    phone_number: Option<String>,
    street: String,
    number: String,
    city: String,
    zip: String,
    country_id: Uuid,
}

/// 配送先住所の入力フォームの組み立てと送信処理
pub struct PrintAddressService {
    user_repo: Arc<UserRepository>,
    payment_repo: Arc<PaymentRepository>,
    address_repo: Arc<AddressRepository>,
    change_request_repo: Arc<AddressChangeRequestRepository>,
    country_repo: Arc<CountryRepository>,
    extensions: Vec<Arc<dyn AddressFormExtension>>,
}

impl PrintAddressService {
    pub fn new(db: DbPool, default_country_iso: String) -> Self {
        Self::with_extensions(db, default_country_iso, Vec::new())
    }

    /// フォーム拡張付きで作成。拡張は登録順に適用される
    pub fn with_extensions(
        db: DbPool,
        default_country_iso: String,
        extensions: Vec<Arc<dyn AddressFormExtension>>,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let payment_repo = Arc::new(PaymentRepository::new(db.clone()));
        let address_repo = Arc::new(AddressRepository::new(db.clone()));
        let change_request_repo = Arc::new(AddressChangeRequestRepository::new(db.clone()));
        let country_repo = Arc::new(CountryRepository::new(db, default_country_iso));

        Self {
            user_repo,
            payment_repo,
            address_repo,
            change_request_repo,
            country_repo,
            extensions,
        }
    }

    /// 支払いに紐付く住所入力フォームの記述を組み立てる
    ///
    /// 既存のprint住所があれば全フィールドを事前入力し、なければ
    /// ユーザーの氏名のみを事前入力する。
    pub async fn build_form(&self, variable_symbol: &str) -> AppResult<FormDescriptor> {
        let payment = self.find_payment(variable_symbol).await?;
        let user = self.find_user(&payment).await?;

        let print_address = self
            .address_repo
            .find_by_user_and_type(user.id, ADDRESS_TYPE_PRINT)
            .await?;

        let country_options = self
            .country_repo
            .get_default_country_options()
            .await?
            .into_iter()
            .map(|c| SelectOption::new(c.id.to_string(), c.label))
            .collect();

        // 事前入力はユーザー情報より既存住所を優先する
        let (first_name, last_name) = match &print_address {
            Some(address) => (
                Some(address.first_name.clone()),
                Some(address.last_name.clone()),
            ),
            None => (user.first_name.clone(), user.last_name.clone()),
        };

        let mut form = FormDescriptor::new(&payment.variable_symbol, print_address.is_some())
            .add_field(
                FormField::text("first_name", "First name")
                    .required()
                    .with_value(first_name),
            )
            .add_field(
                FormField::text("last_name", "Last name")
                    .required()
                    .with_value(last_name),
            )
            .add_field(
                FormField::text("phone_number", "Phone number")
                    .with_value(print_address.as_ref().and_then(|a| a.phone_number.clone())),
            )
            .add_field(
                FormField::text("address", "Street")
                    .required()
                    .with_value(print_address.as_ref().map(|a| a.street.clone())),
            )
            .add_field(
                FormField::text("number", "House number")
                    .required()
                    .with_value(print_address.as_ref().map(|a| a.number.clone())),
            )
            .add_field(
                FormField::text("zip", "ZIP code")
                    .required()
                    .with_value(print_address.as_ref().map(|a| a.zip.clone())),
            )
            .add_field(
                FormField::text("city", "City")
                    .required()
                    .with_value(print_address.as_ref().map(|a| a.city.clone())),
            )
            .add_field(FormField::select("country_id", "Country", country_options).required());

        for extension in &self.extensions {
            let ctx = AddressFormContext {
                form,
                payment: &payment,
                existing_address: print_address.as_ref(),
            };
            form = extension.provide(ctx);
        }

        Ok(form)
    }

    /// 送信内容を検証し、住所変更申請として保存して即時受理する
    pub async fn submit(
        &self,
        variable_symbol: &str,
        submission: AddressFormSubmission,
    ) -> AppResult<SubmitOutcome> {
        // 複数フォームが同居するページからの無関係な送信を無視する。
        // first_nameキー自体が存在しない場合のみが対象（空文字とは区別する）
        if submission.first_name.is_none() {
            info!(
                variable_symbol = %variable_symbol,
                "Address submission without first_name key ignored"
            );
            return Ok(SubmitOutcome::Skipped);
        }

        let validated = self.validate(&submission)?;

        let payment = self.find_payment(variable_symbol).await?;
        let user = self.find_user(&payment).await?;

        let print_address = self
            .address_repo
            .find_by_user_and_type(user.id, ADDRESS_TYPE_PRINT)
            .await?;

        // printタイプの申請では請求先住所バリアントのカラムは常にnull
        let change_request = self
            .change_request_repo
            .add(NewAddressChangeRequest {
                user_id: user.id,
                address_id: print_address.as_ref().map(|a| a.id),
                address_type: ADDRESS_TYPE_PRINT.to_string(),
                first_name: validated.first_name,
                last_name: validated.last_name,
                phone_number: validated.phone_number,
                street: validated.street,
                number: validated.number,
                city: validated.city,
                zip: validated.zip,
                country_id: validated.country_id,
                company_name: None,
                company_id: None,
                company_tax_id: None,
                company_vat_id: None,
            })
            .await?;

        // 作成できた申請は即時受理して現住所に反映する
        let (change_request, address) = self.change_request_repo.accept(change_request).await?;

        info!(
            user_id = %user.id,
            change_request_id = %change_request.id,
            address_id = %address.id,
            "Print address change request accepted"
        );

        Ok(SubmitOutcome::Saved {
            user,
            change_request,
            address,
        })
    }

    async fn find_payment(&self, variable_symbol: &str) -> AppResult<payment_model::Model> {
        self.payment_repo
            .find_by_variable_symbol(variable_symbol)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Payment with variable symbol {} not found",
                    variable_symbol
                ))
            })
    }

    async fn find_user(&self, payment: &payment_model::Model) -> AppResult<user_model::Model> {
        self.user_repo
            .find_by_id(payment.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", payment.user_id)))
    }

    /// 必須フィールドの存在と形式を検証する。永続化の前に必ず実行される
    fn validate(&self, submission: &AddressFormSubmission) -> AppResult<ValidatedSubmission> {
        let mut errors = Vec::new();

        let first_name = required_field(&mut errors, "first_name", &submission.first_name);
        let last_name = required_field(&mut errors, "last_name", &submission.last_name);
        let street = required_field(&mut errors, "address", &submission.address);
        let number = required_field(&mut errors, "number", &submission.number);
        let zip = required_field(&mut errors, "zip", &submission.zip);
        let city = required_field(&mut errors, "city", &submission.city);
        let country_id_raw = required_field(&mut errors, "country_id", &submission.country_id);

        if !zip.is_empty() && validation::validate_zip(&zip).is_err() {
            errors.push("zip: invalid format".to_string());
        }

        // 電話番号は任意。空文字は未入力とみなす
        let phone_number = submission
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string);

        if let Some(phone) = &phone_number {
            if validation::validate_phone_number(phone).is_err() {
                errors.push("phone_number: invalid format".to_string());
            }
        }

        let country_id = match Uuid::parse_str(&country_id_raw) {
            Ok(id) => id,
            Err(_) => {
                if !country_id_raw.is_empty() {
                    errors.push("country_id: invalid".to_string());
                }
                Uuid::nil()
            }
        };

        if !errors.is_empty() {
            return Err(AppError::ValidationErrors(errors));
        }

        Ok(ValidatedSubmission {
            first_name,
            last_name,
            phone_number,
            street,
            number,
            city,
            zip,
            country_id,
        })
    }
}

/// 必須フィールドの値を取り出す。空または未指定の場合はエラーを積む
fn required_field(errors: &mut Vec<String>, name: &str, value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            errors.push(format!("{}: required", name));
            String::new()
        }
    }
}
