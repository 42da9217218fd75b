//! Semantic preconditions that do not go through the schema registry.

use std::time::{SystemTime, UNIX_EPOCH};

use bigdecimal::{BigDecimal, Zero};
use setkit_schema::NULL_ADDRESS;

use crate::error::{AssertionError, Result};

/// Fails when `account` is empty or the zero address.
pub fn not_null(account: &str, message: impl Into<String>) -> Result<()> {
    if account.is_empty() || account.eq_ignore_ascii_case(NULL_ADDRESS) {
        return Err(AssertionError::precondition("not_null", message));
    }
    Ok(())
}

/// Fails when `quantity <= 0`.
pub fn greater_than_zero(quantity: &BigDecimal, message: impl Into<String>) -> Result<()> {
    if *quantity <= BigDecimal::zero() {
        return Err(AssertionError::precondition("greater_than_zero", message));
    }
    Ok(())
}

/// Fails when `actual < minimum`.
pub fn is_at_least(
    actual: &BigDecimal,
    minimum: &BigDecimal,
    message: impl Into<String>,
) -> Result<()> {
    if actual < minimum {
        return Err(AssertionError::precondition("is_at_least", message));
    }
    Ok(())
}

/// Fails when `actual != expected`.
pub fn is_equal<T: PartialEq>(actual: &T, expected: &T, message: impl Into<String>) -> Result<()> {
    if actual != expected {
        return Err(AssertionError::precondition("is_equal", message));
    }
    Ok(())
}

/// Fails unless `quantity` is an exact multiple of a non-zero `base`.
pub fn is_multiple_of(
    quantity: &BigDecimal,
    base: &BigDecimal,
    message: impl Into<String>,
) -> Result<()> {
    if base.is_zero() || !(quantity % base).is_zero() {
        return Err(AssertionError::precondition("is_multiple_of", message));
    }
    Ok(())
}

/// Fails when `items` is empty.
pub fn is_not_empty<T>(items: &[T], message: impl Into<String>) -> Result<()> {
    if items.is_empty() {
        return Err(AssertionError::precondition("is_not_empty", message));
    }
    Ok(())
}

/// Fails when the two lists differ in length.
pub fn is_equal_length<A, B>(first: &[A], second: &[B], message: impl Into<String>) -> Result<()> {
    if first.len() != second.len() {
        return Err(AssertionError::precondition("is_equal_length", message));
    }
    Ok(())
}

/// Fails unless both addresses are equal, ignoring hex digit case.
pub fn is_equal_address(first: &str, second: &str, message: impl Into<String>) -> Result<()> {
    if !first.eq_ignore_ascii_case(second) {
        return Err(AssertionError::precondition("is_equal_address", message));
    }
    Ok(())
}

/// Fails unless `expiration` (unix seconds) is strictly after now.
pub fn is_valid_expiration(expiration: u64, message: impl Into<String>) -> Result<()> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    is_valid_expiration_at(expiration, now, message)
}

/// [`is_valid_expiration`] against an explicit clock.
pub fn is_valid_expiration_at(expiration: u64, now: u64, message: impl Into<String>) -> Result<()> {
    if expiration <= now {
        return Err(AssertionError::precondition("is_valid_expiration", message));
    }
    Ok(())
}
