//! Binary gate selector.

use std::fmt;

use crate::error::Result;
use crate::gates;
use crate::signal::ToSignal;

/// Binary analog gate.
///
/// Lets callers pick a gate at runtime, e.g. from a table of
/// configured behaviors. [`not_gate`](crate::not_gate) is unary and takes a
/// smoothness, so it is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GateOp {
    /// Analog A ∨ B
    Or,
    /// Analog A ∧ B
    And,
    /// Sign of A - B
    Compare,
    /// A invokes B
    Invoke,
    /// A prevails over B
    Prevail,
    /// Analog A ⊕ B
    Xor,
    /// A · B
    Amp,
}

impl GateOp {
    /// Every binary gate, primitives first.
    pub const ALL: [GateOp; 7] = [
        GateOp::Or,
        GateOp::And,
        GateOp::Compare,
        GateOp::Invoke,
        GateOp::Prevail,
        GateOp::Xor,
        GateOp::Amp,
    ];

    /// Evaluate this gate on two inputs.
    #[inline]
    pub fn eval(self, a: impl ToSignal, b: impl ToSignal) -> Result<f64> {
        match self {
            GateOp::Or => gates::or_gate(a, b),
            GateOp::And => gates::and_gate(a, b),
            GateOp::Compare => gates::compare_gate(a, b),
            GateOp::Invoke => gates::invoke_gate(a, b),
            GateOp::Prevail => gates::prevail_gate(a, b),
            GateOp::Xor => gates::xor_gate(a, b),
            GateOp::Amp => gates::amp_gate(a, b),
        }
    }

    /// Function name of the gate.
    pub fn name(self) -> &'static str {
        match self {
            GateOp::Or => "or_gate",
            GateOp::And => "and_gate",
            GateOp::Compare => "compare_gate",
            GateOp::Invoke => "invoke_gate",
            GateOp::Prevail => "prevail_gate",
            GateOp::Xor => "xor_gate",
            GateOp::Amp => "amp_gate",
        }
    }

    /// Whether swapping the inputs leaves the output unchanged.
    pub fn is_commutative(self) -> bool {
        matches!(self, GateOp::Or | GateOp::And | GateOp::Xor | GateOp::Amp)
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
