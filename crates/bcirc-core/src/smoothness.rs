//! Smoothness setting for the not gate.

use crate::error::{GateError, Result};

/// How smoothly [`not_gate`](crate::not_gate) inverts a signal.
///
/// At zero the inversion is sharp: `sign(a) * (1 - |a|)`, which jumps at
/// `a = 0`. Any other finite value replaces `sign` with
/// `tanh(a * s) / tanh(s)`, which is continuous and differentiable. Larger
/// magnitudes approach the sharp curve. The sign of `s` has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Smoothness(f64);

impl Smoothness {
    /// Sign based inversion. This is the default.
    pub const SHARP: Smoothness = Smoothness(0.0);

    /// Create a smoothness setting.
    ///
    /// # Errors
    ///
    /// [`GateError::InvalidSmoothness`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GateError::InvalidSmoothness(value));
        }
        Ok(Self(value))
    }

    /// The raw parameter.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this is the sign based inversion.
    #[inline]
    pub fn is_sharp(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Smoothness {
    type Error = GateError;

    fn try_from(value: f64) -> Result<Self> {
        Smoothness::new(value)
    }
}

impl From<Smoothness> for f64 {
    fn from(smoothness: Smoothness) -> Self {
        smoothness.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sharp() {
        assert_eq!(Smoothness::default(), Smoothness::SHARP);
        assert!(Smoothness::default().is_sharp());
        assert!(Smoothness::new(-0.0).unwrap().is_sharp());
    }

    #[test]
    fn test_new() {
        let s = Smoothness::new(2.5).unwrap();
        assert_eq!(s.value(), 2.5);
        assert!(!s.is_sharp());
        assert_eq!(Smoothness::try_from(-3.0).unwrap().value(), -3.0);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Smoothness::new(f64::NAN),
            Err(GateError::InvalidSmoothness(v)) if v.is_nan()
        ));
        assert_eq!(
            Smoothness::new(f64::INFINITY),
            Err(GateError::InvalidSmoothness(f64::INFINITY))
        );
    }
}
