//! Cent rounding and transfer bounds for money-moving calls.
//!
//! The daemon takes amounts as JSON numbers, so they stay `f64` on the wire.
//! Rounding goes through a scaled integer and an exact decimal so the value
//! handed back is the nearest `f64` to the intended cent amount.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Smallest amount the daemon accepts for a transfer.
pub const DEFAULT_MIN_TRANSFER: f64 = 0.01;

/// Total coin supply; no single transfer can exceed it.
pub const DEFAULT_MAX_TRANSFER: f64 = 21_000_000.0;

/// Round `amount` to the nearest 0.01, halves up.
///
/// Computes `trunc(amount * 100 + 0.5)` as an integer number of cents and
/// divides it by 100 in decimal. Amounts too large to count in `i64` cents
/// are already integers in `f64` and come back unchanged.
pub fn round_to_two_cents(amount: f64) -> f64 {
    let scaled = (amount * 100.0 + 0.5).trunc();
    if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
        return amount;
    }

    let cents = Decimal::new(scaled as i64, 2);
    // Decimal's own float conversion is not always correctly rounded; the
    // std parser is.
    f64::from_str(&cents.to_string()).unwrap_or(amount)
}

/// Bounds applied to every transfer before it is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferPolicy {
    min_amount: f64,
    max_amount: f64,
}

impl TransferPolicy {
    pub fn new(min_amount: f64, max_amount: f64) -> Result<Self, ValidationError> {
        if !min_amount.is_finite() || !max_amount.is_finite() {
            return Err(ValidationError::InvalidPolicy(format!(
                "bounds must be finite (min={min_amount}, max={max_amount})"
            )));
        }
        if min_amount <= 0.0 {
            return Err(ValidationError::InvalidPolicy(format!(
                "minimum transfer must be positive, got {min_amount}"
            )));
        }
        if min_amount > max_amount {
            return Err(ValidationError::InvalidPolicy(format!(
                "minimum transfer {min_amount} exceeds maximum {max_amount}"
            )));
        }
        Ok(Self {
            min_amount,
            max_amount,
        })
    }

    pub fn min_amount(&self) -> f64 {
        self.min_amount
    }

    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Check `amount` against the bounds and return it rounded to cents.
    pub fn check(&self, amount: f64) -> Result<f64, ValidationError> {
        // Written so that NaN lands in the first branch.
        if !(amount >= self.min_amount) {
            return Err(ValidationError::AmountTooSmall {
                amount,
                min: self.min_amount,
            });
        }
        if amount > self.max_amount {
            return Err(ValidationError::AmountExceedsCap {
                amount,
                max: self.max_amount,
            });
        }
        Ok(round_to_two_cents(amount))
    }
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_TRANSFER,
            max_amount: DEFAULT_MAX_TRANSFER,
        }
    }
}
