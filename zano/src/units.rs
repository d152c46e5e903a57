//! Conversion between human amounts and integer base units.  All of it
//! is exact decimal arithmetic; no floats anywhere.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount {0} is negative")]
    Negative(Decimal),

    #[error("amount {amount} has more than {decimal_point} decimal places")]
    TooPrecise { amount: Decimal, decimal_point: u32 },
}

/// `amount × 10^decimal_point` as an integer string, the form the wallet
/// expects in `destinations[].amount`.  Built from the decimal digits, so
/// any decimal point works.
pub fn to_base_units(amount: Decimal, decimal_point: u32) -> Result<String, UnitsError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(UnitsError::Negative(amount));
    }
    let amount = amount.normalize();
    let scale = amount.scale();
    if scale > decimal_point {
        return Err(UnitsError::TooPrecise {
            amount,
            decimal_point,
        });
    }
    let mantissa = amount.mantissa();
    if mantissa == 0 {
        return Ok("0".into());
    }
    let zeros = (decimal_point - scale) as usize;
    Ok(format!("{mantissa}{}", "0".repeat(zeros)))
}

/// `raw / 10^decimal_point` rendered without trailing zeros ("1.5",
/// "42", "0").  Pure digit shuffling, no precision ceiling.
pub fn from_base_units(raw: u128, decimal_point: u32) -> String {
    let d = decimal_point as usize;
    let digits = format!("{raw:0>width$}", width = d + 1);
    let (whole, frac) = digits.split_at(digits.len() - d);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{frac}")
    }
}
