use serde_json::Value;

use crate::server::error::AppError;

/// Outcome of coercing a raw JSON amount.
#[derive(Debug, PartialEq)]
enum RawAmount {
    Missing,
    Invalid,
    Value(f64),
}

/// Coerces a JSON number or numeric string into a finite `f64`.
///
/// `null`, an absent field and a blank string count as missing. Strings are
/// trimmed before parsing. Non-finite results (`"inf"`, `"NaN"`) are invalid.
fn coerce_amount(value: Option<&Value>) -> RawAmount {
    let parsed = match value {
        None | Some(Value::Null) => return RawAmount::Missing,
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return RawAmount::Missing,
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(amount) if amount.is_finite() => RawAmount::Value(amount),
        _ => RawAmount::Invalid,
    }
}

/// Parses the amount of a student payment submission.
///
/// # Returns
/// - `Ok(f64)` - Finite amount greater than zero
/// - `Err(AppError::BadRequest)` - Amount missing, not numeric, or not positive
pub fn parse_payment_amount(value: Option<&Value>) -> Result<f64, AppError> {
    match coerce_amount(value) {
        RawAmount::Missing => Err(AppError::BadRequest(
            "Amount and payment method are required".to_string(),
        )),
        RawAmount::Invalid => Err(AppError::BadRequest(
            "Amount must be a valid number".to_string(),
        )),
        RawAmount::Value(amount) if amount <= 0.0 => Err(AppError::BadRequest(
            "Amount must be greater than zero".to_string(),
        )),
        RawAmount::Value(amount) => Ok(amount),
    }
}

/// Parses the amount of an administrator fee credit.
///
/// Negative amounts are accepted so that a mistaken credit can be reversed.
///
/// # Returns
/// - `Ok(f64)` - Finite, non-zero amount
/// - `Err(AppError::BadRequest)` - Amount missing, not numeric, or zero
pub fn parse_credit_amount(value: Option<&Value>) -> Result<f64, AppError> {
    match coerce_amount(value) {
        RawAmount::Missing => Err(AppError::BadRequest("Amount is required".to_string())),
        RawAmount::Invalid => Err(AppError::BadRequest(
            "Amount must be a valid number".to_string(),
        )),
        RawAmount::Value(amount) if amount == 0.0 => Err(AppError::BadRequest(
            "Amount must not be zero".to_string(),
        )),
        RawAmount::Value(amount) => Ok(amount),
    }
}
