//! Disassembler tests.

use rstest::rstest;
use rvstep_core::common::constants::SENTINEL;
use rvstep_core::isa::disasm::{SENTINEL_TEXT, UNKNOWN_TEXT, disassemble};

use crate::common::builder::instruction::*;

#[rstest]
#[case(addi(1, 0, 5), "addi ra, zero, 5")]
#[case(add(10, 11, 12), "add a0, a1, a2")]
#[case(rem(5, 6, 7), "rem t0, t1, t2")]
#[case(sw(10, 2, -4), "sw a0, -4(sp)")]
#[case(lw(10, 2, 8), "lw a0, 8(sp)")]
#[case(beq(10, 0, 8), "beq a0, zero, 8")]
#[case(jal(1, -16), "jal ra, -16")]
#[case(jalr(0, 1, 0), "jalr zero, 0(ra)")]
#[case(lui(5, 0x12345), "lui t0, 0x12345")]
#[case(auipc(5, 0x1), "auipc t0, 0x1")]
fn mnemonics(#[case] inst: u32, #[case] text: &str) {
    assert_eq!(disassemble(inst), text);
}

#[test]
fn sentinel_and_unknown() {
    assert_eq!(disassemble(SENTINEL), SENTINEL_TEXT);
    assert_eq!(disassemble(0), UNKNOWN_TEXT);
    assert_eq!(disassemble(i_type(0b0010011, 1, 0b010, 2, 1)), UNKNOWN_TEXT);
}
