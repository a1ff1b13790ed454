//! End-to-end programs run through the sequencer.

use pretty_assertions::assert_eq;
use rvstep_core::common::constants::INITIAL_SP;
use rvstep_core::sim::StepOutcome;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn addi_from_reset() {
    let mut ctx = TestContext::new(&[addi(1, 0, 5)]);
    ctx.step_n(1);
    assert_eq!(ctx.reg(1), 5);
    assert_eq!(ctx.pc(), 4);
    assert_eq!(ctx.cpu().clock, 1);
}

#[test]
fn store_word_at_stack_pointer() {
    let mut ctx = TestContext::new(&[sw(1, 2, 0)]).set_reg(1, 0x2A);
    ctx.step_n(1);
    let bytes: Vec<u8> = (0..4)
        .map(|i| ctx.read_mem(INITIAL_SP + i, 1) as u8)
        .collect();
    assert_eq!(bytes, [0x2A, 0x00, 0x00, 0x00]);
}

#[test]
fn taken_branch_at_0x100() {
    let mut ctx = TestContext::at(0x100, &[beq(0, 0, 8)]);
    ctx.step_n(1);
    assert_eq!(ctx.pc(), 0x108);
}

#[test]
fn fetch_past_program_halts() {
    let mut ctx = TestContext::new(&[]);
    ctx.cpu_mut().pc = 0x8000;
    assert_eq!(ctx.step(), StepOutcome::Halted);
}

#[test]
fn counted_loop() {
    // t0 = 5; do { a0 += t0; t0 -= 1 } while t0 != 0
    let mut ctx = TestContext::new(&[
        addi(5, 0, 5),
        add(10, 10, 5),
        addi(5, 5, -1),
        bne(5, 0, -8),
    ]);
    assert_eq!(ctx.run(), 1 + 3 * 5);
    assert_eq!(ctx.reg(10), 15);
    assert_eq!(ctx.cpu().stats.branches_taken, 4);
    assert_eq!(ctx.cpu().stats.branches_not_taken, 1);
}

#[test]
fn call_and_return() {
    let mut ctx = TestContext::new(&[
        jal(1, 12),       // 0x0: call 0xC
        addi(11, 10, 0),  // 0x4: a1 = a0
        jal(0, 12),       // 0x8: jump to end
        addi(10, 0, 7),   // 0xC: a0 = 7
        jalr(0, 1, 0),    // 0x10: return
    ]);
    assert_eq!(ctx.run(), 5);
    assert_eq!(ctx.reg(11), 7);
    assert_eq!(ctx.reg(1), 4);
    assert_eq!(ctx.pc(), 0x14);
}

#[test]
fn data_round_trip_through_stack() {
    let mut ctx = TestContext::new(&[
        addi(2, 2, -8),
        lui(5, 0xABCDE),
        ori(5, 5, 0x123),
        sw(5, 2, 4),
        lw(6, 2, 4),
        lb(7, 2, 4),
    ]);
    let _ = ctx.run();
    assert_eq!(ctx.reg(6), 0xABCD_E123);
    assert_eq!(ctx.reg(7), 0x23);
    assert_eq!(ctx.reg(2), INITIAL_SP - 8);
}

#[test]
fn multiply_divide() {
    let mut ctx = TestContext::new(&[mul(3, 1, 2), div(4, 3, 2), rem(5, 1, 2), div(6, 1, 0)])
        .set_reg(1, 17)
        .set_reg(2, 5);
    let _ = ctx.run();
    assert_eq!(ctx.reg(3), 85);
    assert_eq!(ctx.reg(4), 17);
    assert_eq!(ctx.reg(5), 2);
    assert_eq!(ctx.reg(6), 0);
}

#[test]
fn auipc_in_loaded_program() {
    let mut ctx = TestContext::at(0x400, &[addi(0, 0, 0), auipc(10, 2)]);
    let _ = ctx.run();
    assert_eq!(ctx.reg(10), 0x404 + 0x2000);
}
