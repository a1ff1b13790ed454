//! Error formatting tests.

use rvstep_core::SimError;
use rvstep_core::common::Stage;

#[test]
fn messages_name_the_failing_value() {
    let err = SimError::UnsupportedOpcode {
        inst: 0x0000_007F,
        opcode: 0x7F,
    };
    assert!(err.to_string().contains("0x0000007f"));

    let err = SimError::Uninitialized {
        stage: Stage::Execute,
        latch: "RA",
    };
    assert_eq!(err.to_string(), "execute stage needs RA, which holds no value");

    let err = SimError::StageOrder {
        expected: Stage::Fetch,
        found: Stage::Memory,
    };
    assert_eq!(err.to_string(), "expected the fetch stage, but memory was requested");
}

#[test]
fn decode_errors_are_classified() {
    assert!(SimError::UnsupportedOpcode { inst: 0, opcode: 0 }.is_decode_error());
    assert!(
        SimError::UnsupportedFunct {
            inst: 0,
            funct3: 1,
            funct7: 0
        }
        .is_decode_error()
    );
    assert!(!SimError::StepLimit { limit: 1 }.is_decode_error());
}
