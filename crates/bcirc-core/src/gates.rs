//! Analog logic gates over signals in [-1, 1].
//!
//! Every gate validates its arguments with [`check_gate_input`] and then
//! evaluates an unchecked kernel. Derived gates compose the kernels of the
//! primitive gates, so each public call validates exactly once.
//!
//! The or based formulas overshoot [-1, 1] slightly between boundary
//! points (`or_gate(1, 0.375)` would be about 1.033). Their results are
//! saturated into the interval so any output can be fed into another gate.
//! Boundary values are exact and never touched by saturation.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::signal::ToSignal;
use crate::smoothness::Smoothness;
use crate::validate::check_gate_input;

static TANH_2: Lazy<f64> = Lazy::new(|| 2.0_f64.tanh());

#[inline]
fn saturate(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

#[inline]
fn or_kernel(a: f64, b: f64) -> f64 {
    saturate(a + b - a * b * (a + b).tanh() / *TANH_2)
}

#[inline]
fn and_kernel(a: f64, b: f64) -> f64 {
    saturate(a * b * (a + b).tanh() / *TANH_2)
}

#[inline]
fn compare_kernel(a: f64, b: f64) -> f64 {
    or_kernel(a, -b)
}

/// Logical or extended to [-1, 1].
///
/// `a + b - a*b*tanh(a + b)/tanh(2)`
///
/// ```
/// use bcirc_core::or_gate;
///
/// assert_eq!(or_gate(1, 1)?, 1.0);
/// assert_eq!(or_gate(0, 0)?, 0.0);
/// assert_eq!(or_gate(-1, 0)?, -1.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn or_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(or_kernel(a, b))
}

/// Logical and extended to [-1, 1].
///
/// `a*b*tanh(a + b)/tanh(2)`. Mixed or zero boundary inputs give a zero whose
/// sign is unspecified.
///
/// ```
/// use bcirc_core::and_gate;
///
/// assert_eq!(and_gate(1, 1)?, 1.0);
/// assert_eq!(and_gate(0, 0)?, 0.0);
/// assert_eq!(and_gate(-1, 0)?, 0.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn and_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(and_kernel(a, b))
}

/// Positive when `a` is larger than `b`, negative when it is smaller.
///
/// Equal to `or_gate(a, -b)` and antisymmetric in its arguments.
///
/// ```
/// use bcirc_core::compare_gate;
///
/// assert_eq!(compare_gate(1, 1)?, 0.0);
/// assert_eq!(compare_gate(1, -1)?, 1.0);
/// assert_eq!(compare_gate(-1, 1)?, -1.0);
/// assert_eq!(compare_gate(1, 0)?, 1.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn compare_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(compare_kernel(a, b))
}

/// `a` invokes `b`: `and_gate(a, or_gate(a, b))`.
///
/// When `a` is -1, 0 or 1 the output stays at that value unless `b`
/// opposes it; `b` only shapes the output in between.
///
/// ```
/// use bcirc_core::invoke_gate;
///
/// assert_eq!(invoke_gate(0, 1)?, 0.0);
/// assert_eq!(invoke_gate(1, -1)?, 0.0);
/// assert_eq!(invoke_gate(1, 0)?, 1.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn invoke_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(and_kernel(a, or_kernel(a, b)))
}

/// `a` prevails over `b` the larger it gets: `or_gate(a, or_gate(a, b))`.
///
/// With `a = 0` the output is `b`.
///
/// ```
/// use bcirc_core::prevail_gate;
///
/// assert_eq!(prevail_gate(0, 1)?, 1.0);
/// assert_eq!(prevail_gate(1, -1)?, 1.0);
/// assert_eq!(prevail_gate(0, 0.25)?, 0.25);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn prevail_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(or_kernel(a, or_kernel(a, b)))
}

/// Exclusive or extended to [-1, 1]: `compare_gate(a, b)² * or_gate(a, b)`.
///
/// ```
/// use bcirc_core::xor_gate;
///
/// assert_eq!(xor_gate(0, 1)?, 1.0);
/// assert_eq!(xor_gate(1, 1)?, 0.0);
/// assert_eq!(xor_gate(1, 0)?, 1.0);
/// assert_eq!(xor_gate(1, -1.0)?, 0.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn xor_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    let difference = compare_kernel(a, b);
    Ok(difference * difference * or_kernel(a, b))
}

/// Logical not extended to [-1, 1].
///
/// An input of exactly 0 inverts to 1. Otherwise the output is
/// `sign(a) * (1 - |a|)` for [`Smoothness::SHARP`], or
/// `tanh(a*s)/tanh(s) * (1 - |a|)` for a smoothness `s`. The sharp curve
/// jumps at 0; pass a nonzero smoothness when the output has to be
/// differentiable.
///
/// ```
/// use bcirc_core::{not_gate, Smoothness};
///
/// assert_eq!(not_gate(1, Smoothness::SHARP)?, 0.0);
/// assert_eq!(not_gate(-1.0, Smoothness::SHARP)?, 0.0);
/// assert_eq!(not_gate(0, Smoothness::SHARP)?, 1.0);
/// assert_eq!(not_gate(0.5, Smoothness::SHARP)?, 0.5);
/// assert!(not_gate(0.5, Smoothness::new(2.0)?)? < 0.5);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn not_gate(a: impl ToSignal, smoothness: Smoothness) -> Result<f64> {
    let (a, _) = check_gate_input(a, 0.0)?;
    if a == 0.0 {
        return Ok(1.0);
    }

    let remaining = 1.0 - a.abs();
    if smoothness.is_sharp() {
        Ok(a.signum() * remaining)
    } else {
        let s = smoothness.value();
        Ok((a * s).tanh() / s.tanh() * remaining)
    }
}

/// One input amplifies the other: `a * b`.
///
/// The product is symmetric, so either input can act as the signal.
/// Negative amplification flips the sign.
///
/// ```
/// use bcirc_core::amp_gate;
///
/// assert_eq!(amp_gate(1, 0.5)?, 0.5);
/// assert_eq!(amp_gate(0.5, 1)?, 0.5);
/// assert_eq!(amp_gate(1, -1)?, -1.0);
/// # Ok::<(), bcirc_core::GateError>(())
/// ```
pub fn amp_gate(a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
    let (a, b) = check_gate_input(a, b)?;
    Ok(a * b)
}
