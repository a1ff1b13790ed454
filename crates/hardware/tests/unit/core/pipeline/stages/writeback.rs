//! Writeback stage tests.

use rvstep_core::common::Stage;

use super::{cpu_at, run_through};
use crate::common::builder::instruction::*;

#[test]
fn commits_result_and_advances_clock() {
    let mut cpu = cpu_at(0, &[addi(1, 0, 5)]);
    run_through(&mut cpu, Stage::Writeback);
    assert_eq!(cpu.regs.read(1), 5);
    assert_eq!(cpu.clock, 1);
    assert_eq!(cpu.stats.instructions_retired, 1);
    assert_eq!(cpu.stats.inst_alu, 1);
}

#[test]
fn zero_register_discards_result() {
    let mut cpu = cpu_at(0, &[addi(0, 0, 5)]);
    run_through(&mut cpu, Stage::Writeback);
    assert_eq!(cpu.regs.read(0), 0);
    assert_eq!(cpu.clock, 1);
}

#[test]
fn store_writes_no_register() {
    let mut cpu = cpu_at(0, &[sw(1, 0, 0x100)]);
    cpu.regs.write(1, 7);
    let regs = cpu.regs.clone();
    run_through(&mut cpu, Stage::Writeback);
    assert_eq!(cpu.regs, regs);
    assert_eq!(cpu.stats.inst_store, 1);
}

#[test]
fn branch_outcome_is_counted() {
    let mut cpu = cpu_at(0, &[beq(0, 0, 8)]);
    run_through(&mut cpu, Stage::Writeback);
    assert_eq!(cpu.stats.inst_branch, 1);
    assert_eq!(cpu.stats.branches_taken, 1);
}
