//! Shared precondition check for every gate.

use tracing::debug;

use crate::error::{GateError, Result};
use crate::signal::ToSignal;

/// Check that both gate inputs are real numbers within [-1, 1].
///
/// Both arguments are coerced first, so a non-numeric argument is reported
/// as [`GateError::TypeConversion`] even when the other one is out of range.
/// On success the coerced pair is returned.
///
/// # Errors
///
/// - [`GateError::TypeConversion`] if either argument is not a real number
///   (unparseable text or NaN)
/// - [`GateError::DomainRange`] if either magnitude exceeds 1
///
/// # Example
///
/// ```
/// use bcirc_core::{check_gate_input, GateError};
///
/// assert_eq!(check_gate_input(1, 1.0), Ok((1.0, 1.0)));
/// assert!(matches!(check_gate_input(1, "a"), Err(GateError::TypeConversion(_))));
/// assert_eq!(check_gate_input(1.2, -1.2), Err(GateError::DomainRange(1.2)));
/// ```
pub fn check_gate_input(a: impl ToSignal, b: impl ToSignal) -> Result<(f64, f64)> {
    let a = coerce(&a)?;
    let b = coerce(&b)?;
    Ok((check_range(a)?, check_range(b)?))
}

/// Validate a single raw value.
pub(crate) fn check_signal(value: f64) -> Result<f64> {
    coerce(&value).and_then(check_range)
}

fn coerce(input: &impl ToSignal) -> Result<f64> {
    let value = match input.to_real() {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "gate input rejected");
            return Err(err);
        }
    };

    if value.is_nan() {
        debug!("gate input rejected: NaN");
        return Err(GateError::TypeConversion(value.to_string()));
    }

    Ok(value)
}

fn check_range(value: f64) -> Result<f64> {
    if value.abs() > 1.0 {
        debug!(value, "gate input rejected: outside [-1, 1]");
        return Err(GateError::DomainRange(value));
    }
    Ok(value)
}
