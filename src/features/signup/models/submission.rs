use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validation::validate_wifi_password;

/// Plans offered by the signup form. Each includes one connected TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    /// Up to 50 Mbps + 1 TV.
    #[serde(rename = "50")]
    Mega50,
    /// Up to 100 Mbps + 1 TV.
    #[serde(rename = "100")]
    Mega100,
}

impl Plan {
    pub fn speed_mbps(&self) -> u16 {
        match self {
            Plan::Mega50 => 50,
            Plan::Mega100 => 100,
        }
    }

    /// Recurring monthly price of the plan. Displayed in the summary;
    /// never part of the one-time connection total.
    pub fn monthly_price(&self) -> Decimal {
        match self {
            Plan::Mega50 => Decimal::from(39_360),
            Plan::Mega100 => Decimal::from(44_520),
        }
    }

    pub fn label(&self) -> String {
        format!(
            "HASTA {} MEGAS + 1TV - ${}",
            self.speed_mbps(),
            self.monthly_price()
        )
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Plan::Mega50 => write!(f, "50"),
            Plan::Mega100 => write!(f, "100"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// The applicant receives a transfer alias and pays manually.
    #[default]
    Manual,
    /// Recurring charge against a debit or credit card.
    AutoDebit,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Manual => write!(f, "manual"),
            PaymentMethod::AutoDebit => write!(f, "auto_debit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Debit,
    Credit,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Debit => write!(f, "debit"),
            CardType::Credit => write!(f, "credit"),
        }
    }
}

/// Card data entered when the payment method is auto-debit. Only the card
/// number is ever validated; expiry, type and bank are collected as typed but
/// not checked. Values persist when the payment method is switched away and
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub card_type: Option<CardType>,
    pub bank: String,
}

impl CardDetails {
    pub fn is_blank(&self) -> bool {
        self.number.is_empty()
            && self.expiry.is_empty()
            && self.card_type.is_none()
            && self.bank.is_empty()
    }
}

/// The signup request under construction. Built one field at a time,
/// last-write-wins, and held in memory for the duration of the page session.
///
/// The `Validate` derive covers the unconditional rules; the conditional
/// ones (card number under auto-debit, attachment slots) live in
/// `validation_service`. Email, map link and card fields intentionally get
/// no format validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupSubmission {
    #[validate(required(message = "Debe seleccionar un plan"))]
    pub plan: Option<Plan>,

    #[validate(length(min = 1, message = "La dirección es obligatoria"))]
    pub address: String,

    #[validate(length(min = 1, message = "El barrio es obligatorio"))]
    pub neighborhood: String,

    #[validate(length(min = 1, message = "La localidad es obligatoria"))]
    pub locality: String,

    /// Map link for the installer. Expected to be a URL, accepted as-is.
    #[validate(length(min = 1, message = "La ubicación es obligatoria"))]
    pub map_link: String,

    #[validate(length(min = 1, message = "El email es obligatorio"))]
    pub email: String,

    #[validate(length(min = 1, message = "El teléfono es obligatorio"))]
    pub phone: String,

    /// Optional; assigned to the installed equipment when provided.
    #[validate(custom(function = validate_wifi_password))]
    pub wifi_password: String,

    #[validate(range(max = 5, message = "Cantidad de TVs adicionales inválida"))]
    pub additional_tv_count: u8,

    pub payment_method: PaymentMethod,

    pub card: CardDetails,
}

/// Editable field keys, matching the error-map keys used by the validator
/// and the form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Plan,
    Address,
    Neighborhood,
    Locality,
    MapLink,
    Email,
    Phone,
    WifiPassword,
    AdditionalTvCount,
    PaymentMethod,
    CardNumber,
    CardExpiry,
    CardType,
    CardBank,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Plan => "plan",
            Field::Address => "address",
            Field::Neighborhood => "neighborhood",
            Field::Locality => "locality",
            Field::MapLink => "map_link",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::WifiPassword => "wifi_password",
            Field::AdditionalTvCount => "additional_tv_count",
            Field::PaymentMethod => "payment_method",
            Field::CardNumber => "card_number",
            Field::CardExpiry => "card_expiry",
            Field::CardType => "card_type",
            Field::CardBank => "card_bank",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_submission_matches_initial_form_state() {
        let submission = SignupSubmission::default();

        assert!(submission.plan.is_none());
        assert_eq!(submission.additional_tv_count, 0);
        assert_eq!(submission.payment_method, PaymentMethod::Manual);
        assert!(submission.card.is_blank());
    }

    #[test]
    fn test_plan_monthly_prices() {
        assert_eq!(Plan::Mega50.monthly_price(), Decimal::from(39_360));
        assert_eq!(Plan::Mega100.monthly_price(), Decimal::from(44_520));
    }

    #[test]
    fn test_submission_serializes_with_contract_field_names() {
        let submission = SignupSubmission {
            plan: Some(Plan::Mega100),
            ..Default::default()
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["plan"], "100");
        assert_eq!(json["payment_method"], "manual");
        assert!(json.get("map_link").is_some());
        assert!(json.get("wifi_password").is_some());
    }
}
