//! Behavior circuits: continuous analog logic gates.
//!
//! # Overview
//!
//! The gates generalize boolean logic to signals in [-1, 1], where -1 is
//! false, 0 is neutral and 1 is true. Key properties:
//!
//! - **Boolean at the boundary** — on {-1, 0, 1} every logic gate matches
//!   its discrete truth table exactly
//! - **Smooth in between** — outputs interpolate continuously, so gates can
//!   be chained into differentiable controllers
//! - **Closed** — every output is again a valid signal
//! - **Pure** — no state; a call depends only on its arguments
//!
//! Every gate checks its inputs with [`check_gate_input`] and fails with a
//! [`GateError`] instead of clamping them.
//!
//! # Example
//!
//! ```
//! use bcirc_core::{or_gate, and_gate, prevail_gate, not_gate, Smoothness};
//!
//! // Obstacle ahead is fairly likely, the goal is straight ahead.
//! let obstacle = 0.7;
//! let goal = 1.0;
//!
//! // Avoiding the obstacle prevails over heading for the goal.
//! let avoid = not_gate(obstacle, Smoothness::new(3.0)?)?;
//! let steer = prevail_gate(obstacle, goal)?;
//! assert!(avoid < 1.0);
//! assert!((-1.0..=1.0).contains(&steer));
//!
//! // Outputs chain straight into further gates.
//! let combined = or_gate(and_gate(avoid, steer)?, -0.2)?;
//! assert!((-1.0..=1.0).contains(&combined));
//! # Ok::<(), bcirc_core::GateError>(())
//! ```
//!
//! # Errors
//!
//! ```
//! use bcirc_core::{xor_gate, GateError};
//!
//! assert_eq!(xor_gate(1.2, 0), Err(GateError::DomainRange(1.2)));
//! assert!(matches!(xor_gate("a", 0), Err(GateError::TypeConversion(_))));
//! ```

pub mod error;
pub mod gates;
pub mod op;
pub mod signal;
pub mod smoothness;
pub mod validate;

pub use error::{GateError, Result};
pub use gates::{
    amp_gate, and_gate, compare_gate, invoke_gate, not_gate, or_gate, prevail_gate, xor_gate,
};
pub use op::GateOp;
pub use signal::{Signal, ToSignal};
pub use smoothness::Smoothness;
pub use validate::check_gate_input;
