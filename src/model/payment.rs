use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentDto {
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub method: Option<String>,
    pub info: Option<String>,
}

/// Body of a payment request.
///
/// `date` and `quantity` are kept as raw JSON: a date may arrive as an ISO string
/// or epoch milliseconds, a quantity as a number or a numeric string. Anything that does
/// not parse falls back to "now" and `0` respectively.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreatePaymentDto {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2026-10-01T09:30:00Z")]
    pub date: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 400000)]
    pub quantity: Option<serde_json::Value>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}
