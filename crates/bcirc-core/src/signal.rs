//! Signals: fuzzy truth values confined to [-1, 1].
//!
//! A signal of -1 reads as false, 1 as true and 0 as neutral. Anything in
//! between is a degree of truth. Gates accept any argument implementing
//! [`ToSignal`] and coerce it to a real number before range checking.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::{GateError, Result};
use crate::validate::check_signal;

/// Numeric coercion of a gate argument.
///
/// Implementations only convert; the range check lives in
/// [`check_gate_input`](crate::check_gate_input). Text is trimmed and parsed
/// as a float, `bool` maps to 0 or 1.
pub trait ToSignal {
    /// Interpret `self` as a real number.
    fn to_real(&self) -> Result<f64>;
}

macro_rules! numeric_to_signal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSignal for $ty {
                #[inline]
                fn to_real(&self) -> Result<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

numeric_to_signal!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToSignal for bool {
    #[inline]
    fn to_real(&self) -> Result<f64> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl ToSignal for str {
    fn to_real(&self) -> Result<f64> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| GateError::TypeConversion(self.to_string()))
    }
}

impl ToSignal for String {
    fn to_real(&self) -> Result<f64> {
        self.as_str().to_real()
    }
}

impl ToSignal for Signal {
    #[inline]
    fn to_real(&self) -> Result<f64> {
        Ok(self.0)
    }
}

impl<T: ToSignal + ?Sized> ToSignal for &T {
    #[inline]
    fn to_real(&self) -> Result<f64> {
        (**self).to_real()
    }
}

/// A validated real number in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Signal(f64);

impl Signal {
    /// Boolean false.
    pub const FALSE: Signal = Signal(-1.0);
    /// Neither true nor false.
    pub const NEUTRAL: Signal = Signal(0.0);
    /// Boolean true.
    pub const TRUE: Signal = Signal(1.0);

    /// Create a signal, rejecting NaN and anything outside [-1, 1].
    pub fn new(value: f64) -> Result<Self> {
        check_signal(value).map(Signal)
    }

    /// The raw value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the value is one of -1, 0 or 1.
    pub fn is_boundary(self) -> bool {
        self.0 == -1.0 || self.0 == 0.0 || self.0 == 1.0
    }
}

impl TryFrom<f64> for Signal {
    type Error = GateError;

    fn try_from(value: f64) -> Result<Self> {
        Signal::new(value)
    }
}

impl From<Signal> for f64 {
    fn from(signal: Signal) -> Self {
        signal.0
    }
}

impl FromStr for Signal {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        Signal::new(s.to_real()?)
    }
}

impl Neg for Signal {
    type Output = Signal;

    fn neg(self) -> Signal {
        Signal(-self.0)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
