//! Deserialized configuration goes through the same validation as code.

#![cfg(feature = "serde")]

use bcirc_core::{GateOp, Signal, Smoothness};

#[test]
fn test_signal_rejects_out_of_range_json() {
    assert_eq!(
        serde_json::from_str::<Signal>("0.25").unwrap().value(),
        0.25
    );
    let err = serde_json::from_str::<Signal>("1.5").unwrap_err();
    assert!(err.to_string().contains("within [-1,1]"));
}

#[test]
fn test_smoothness_and_ops_from_json() {
    let s: Smoothness = serde_json::from_str("3.0").unwrap();
    assert_eq!(s.value(), 3.0);

    let ops: Vec<GateOp> = serde_json::from_str(r#"["or", "prevail", "amp"]"#).unwrap();
    assert_eq!(ops, [GateOp::Or, GateOp::Prevail, GateOp::Amp]);
    assert_eq!(serde_json::to_string(&GateOp::Compare).unwrap(), r#""compare""#);
}
