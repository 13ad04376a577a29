use crate::{error::EvalError, evaluator::core::EvalResult};

/// Safely converts an `i64` to `u32` if and only if it is in range.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the value does not fit.
///
/// ## Example
/// ```
/// use semicalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(9, "out of range"), Ok(9));
/// assert!(i64_to_u32_checked(-1, "out of range").is_err());
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}

/// Computes `base ^ exponent` with exact checked arithmetic.
///
/// The exponent must be non-negative and the result must fit an `i64`; both
/// conditions are verified exactly rather than estimated with a
/// floating-point bound. Overflow is detected by `i64::checked_pow`, so a
/// too-large result is reported instead of wrapping.
///
/// ## Errors
/// Returns `EvalError::Exponentiation` for a negative exponent, an exponent
/// beyond `u32::MAX`, or an out-of-range result.
///
/// ## Example
/// ```
/// use semicalc::{EvalError, util::num::checked_pow};
///
/// assert_eq!(checked_pow(2, 9), Ok(512));
/// assert_eq!(checked_pow(2, -1), Err(EvalError::Exponentiation));
/// assert_eq!(checked_pow(2, 63), Err(EvalError::Exponentiation));
/// ```
pub fn checked_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    let exponent = i64_to_u32_checked(exponent, EvalError::Exponentiation)?;
    base.checked_pow(exponent).ok_or(EvalError::Exponentiation)
}
