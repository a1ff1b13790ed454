//! Statistics tests.

use rvstep_core::isa::instruction::OpClass;
use rvstep_core::stats::SimStats;

#[test]
fn retire_buckets() {
    let mut stats = SimStats::default();
    for class in [
        OpClass::Reg,
        OpClass::Imm,
        OpClass::Lui,
        OpClass::Auipc,
        OpClass::Load,
        OpClass::Store,
        OpClass::Jal,
        OpClass::Jalr,
    ] {
        stats.record_retire(class, class == OpClass::Jal);
    }
    stats.record_retire(OpClass::Branch, true);
    stats.record_retire(OpClass::Branch, false);
    stats.record_retire(OpClass::Branch, false);

    assert_eq!(stats.instructions_retired, 11);
    assert_eq!(stats.inst_alu, 4);
    assert_eq!((stats.inst_load, stats.inst_store, stats.inst_jump), (1, 1, 2));
    assert_eq!(stats.inst_branch, 3);
    assert_eq!((stats.branches_taken, stats.branches_not_taken), (1, 2));
}

#[test]
fn report_sections() {
    let mut stats = SimStats::default();
    stats.record_stage();
    stats.record_retire(OpClass::Imm, false);

    let full = stats.report(&[]);
    assert!(full.contains("sim_insts                1"));
    assert!(full.contains("INSTRUCTION MIX"));
    assert!(full.contains("CONTROL FLOW"));

    let only_mix = stats.report(&["mix".to_owned()]);
    assert!(only_mix.contains("op.alu"));
    assert!(!only_mix.contains("sim_insts"));
    assert!(!only_mix.contains("CONTROL FLOW"));
}

#[test]
fn report_handles_empty_run() {
    let report = SimStats::default().report(&["branch".to_owned()]);
    assert!(report.contains("branch.taken           0 (0.00%)"));
}
