//! Payment records and the coercion rules applied to incoming payments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::model::payment::{CreatePaymentDto, PaymentDto};

/// Naive formats accepted for payment dates, interpreted as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A stored payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub method: Option<String>,
    pub info: Option<String>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            date: entity.date,
            quantity: entity.quantity,
            method: entity.method,
            info: entity.info,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            date: self.date,
            quantity: self.quantity,
            method: self.method,
            info: self.info,
        }
    }
}

/// A payment about to be appended to a student's history.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub method: Option<String>,
    pub info: Option<String>,
}

impl NewPayment {
    /// Builds a payment from a request body.
    ///
    /// # Arguments
    /// - `dto` - Request body
    /// - `now` - Instant used when the body carries no usable date
    pub fn from_dto(dto: CreatePaymentDto, now: DateTime<Utc>) -> Self {
        Self {
            date: dto.date.as_ref().and_then(parse_payment_date).unwrap_or(now),
            quantity: dto.quantity.as_ref().map(coerce_quantity).unwrap_or(0.0),
            method: dto.method,
            info: dto.info,
        }
    }
}

/// Reads a payment date from a JSON string or epoch milliseconds.
///
/// Returns `None` for anything that is not a recognisable date.
pub fn parse_payment_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_date_str(raw.trim()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Coerces a JSON value to a payment quantity.
///
/// Numbers pass through, numeric strings are parsed, `true` is 1. Everything else,
/// including non-finite results, is 0.
pub fn coerce_quantity(value: &Value) -> f64 {
    let quantity = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(raw) => raw.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };

    if quantity.is_finite() {
        quantity
    } else {
        0.0
    }
}
