//! Immediate reconstruction tests.

use proptest::prelude::*;
use rstest::rstest;
use rvstep_core::isa::decode::{
    b_type_imm, i_type_imm, j_type_imm, s_type_imm, sign_extend, u_type_imm,
};

use crate::common::builder::instruction::*;

#[rstest]
#[case(0x7FF, 12, 2047)]
#[case(0x800, 12, -2048)]
#[case(0xFFF, 12, -1)]
#[case(0x1000, 13, -4096)]
#[case(0x0FFE, 13, 4094)]
#[case(0x10_0000, 21, -1_048_576)]
#[case(0xFFFF_FFFF, 32, -1)]
#[case(0xFFFF_FFFF, 0, 0)]
fn sign_extension(#[case] val: u32, #[case] bits: u32, #[case] expected: i32) {
    assert_eq!(sign_extend(val, bits), expected);
}

#[test]
fn branch_offset_bit_layout() {
    // beq x0, x0, -4: imm[12]=1 and imm[10:1] all ones.
    assert_eq!(beq(0, 0, -4), 0xFE00_0EE3);
    assert_eq!(b_type_imm(0xFE00_0EE3), -4);
}

#[test]
fn jal_offset_bit_layout() {
    assert_eq!(jal(1, 2048), 0x0010_00EF);
    assert_eq!(j_type_imm(0x0010_00EF), 2048);
}

proptest! {
    #[test]
    fn i_type_round_trip(imm in -2048i32..=2047, rd in 0u32..32, rs1 in 0u32..32) {
        prop_assert_eq!(i_type_imm(addi(rd, rs1, imm)), imm);
    }

    #[test]
    fn s_type_round_trip(imm in -2048i32..=2047, rs1 in 0u32..32, rs2 in 0u32..32) {
        prop_assert_eq!(s_type_imm(sw(rs2, rs1, imm)), imm);
    }

    #[test]
    fn b_type_round_trip(half in -2048i32..=2047) {
        let imm = half * 2;
        prop_assert_eq!(b_type_imm(beq(1, 2, imm)), imm);
    }

    #[test]
    fn j_type_round_trip(half in -(1i32 << 19)..(1i32 << 19)) {
        let imm = half * 2;
        prop_assert_eq!(j_type_imm(jal(1, imm)), imm);
    }

    #[test]
    fn u_type_keeps_upper_bits(upper in 0u32..(1 << 20)) {
        prop_assert_eq!(u_type_imm(lui(5, upper)) as u32, upper << 12);
    }

    #[test]
    fn sign_extend_preserves_low_bits(val: u32, bits in 1u32..=32) {
        let mask = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
        prop_assert_eq!(sign_extend(val, bits) as u32 & mask, val & mask);
    }
}
