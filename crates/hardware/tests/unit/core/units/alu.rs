//! ALU tests.

use proptest::prelude::*;
use rstest::rstest;
use rvstep_core::core::pipeline::signals::AluOp;
use rvstep_core::core::units::alu::Alu;

#[rstest]
#[case(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case(AluOp::Mul, 0x1_0000, 0x1_0000, 0)]
#[case(AluOp::Mul, -3i32 as u32, 7, -21i32 as u32)]
#[case(AluOp::Div, -7i32 as u32, 2, -3i32 as u32)]
#[case(AluOp::Div, 100, 0, 0)]
#[case(AluOp::Div, i32::MIN as u32, -1i32 as u32, i32::MIN as u32)]
#[case(AluOp::Rem, -7i32 as u32, 2, -1i32 as u32)]
#[case(AluOp::Rem, 100, 0, 0)]
#[case(AluOp::Rem, i32::MIN as u32, -1i32 as u32, 0)]
#[case(AluOp::Sll, 1, 33, 2)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Sra, 0x8000_0000, 31, 0xFFFF_FFFF)]
#[case(AluOp::Slt, -1i32 as u32, 0, 1)]
#[case(AluOp::Slt, 0, -1i32 as u32, 0)]
#[case(AluOp::Xor, 0xF0F0, 0xFF00, 0x0FF0)]
#[case(AluOp::Or, 0xF0, 0x0F, 0xFF)]
#[case(AluOp::And, 0xF0, 0x3C, 0x30)]
fn alu_table(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected, "{op:?} {a:#x} {b:#x}");
}

proptest! {
    #[test]
    fn add_then_sub_is_identity(a: u32, b: u32) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }

    #[test]
    fn div_rem_recombine(a: i32, b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let q = Alu::execute(AluOp::Div, a as u32, b as u32);
        let r = Alu::execute(AluOp::Rem, a as u32, b as u32);
        prop_assert_eq!(q.wrapping_mul(b as u32).wrapping_add(r), a as u32);
    }
}
