//! Snapshot tests.

use pretty_assertions::assert_eq;
use rvstep_core::sim::snapshot::LatchView;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn reset_snapshot() {
    let ctx = TestContext::new(&[addi(1, 0, 5)]);
    let snap = ctx.sim.snapshot();
    assert_eq!(snap.pc, "0x00000000");
    assert_eq!(snap.next_stage, "fetch");
    assert!(!snap.halted);
    assert_eq!(snap.registers.len(), 32);
    assert_eq!(snap.registers[2], "0x7FFFFFDC");
    assert_eq!(snap.memory.get("0x00000000").map(String::as_str), Some("93"));
    assert_eq!(snap.latches, LatchView::default());
}

#[test]
fn latches_after_decode() {
    let mut ctx = TestContext::new(&[addi(1, 0, 5)]);
    ctx.sim.fetch().unwrap();
    ctx.sim.decode().unwrap();
    let view = ctx.sim.snapshot().latches;
    assert_eq!(
        view,
        LatchView {
            ir: Some("0x00500093".into()),
            instruction: Some("addi ra, zero, 5".into()),
            pc_temp: Some("0x00000004".into()),
            ra: Some("0x00000000".into()),
            imm_b: Some("0x00000005".into()),
            ..LatchView::default()
        }
    );
}

#[test]
fn json_shape() {
    let mut ctx = TestContext::new(&[addi(1, 0, 5)]);
    ctx.step_n(1);
    let json = ctx.sim.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pc"], "0x00000004");
    assert_eq!(value["clock"], 1);
    assert_eq!(value["registers"][1], "0x00000005");
    assert_eq!(value["latches"]["rb"], serde_json::Value::Null);
    assert_eq!(value["stats"]["instructions_retired"], 1);
}

#[test]
fn doubleword_mdr_uses_sixteen_digits() {
    let mut ctx = TestContext::new(&[ld(1, 0, 0x100)]).with_memory(0x100, &[0, 0, 0, 0, 1, 0, 0, 0]);
    ctx.step_n(1);
    let view = ctx.sim.snapshot().latches;
    assert_eq!(view.mdr.as_deref(), Some("0x0000000100000000"));
    assert_eq!(view.ry.as_deref(), Some("0x00000000"));
}
