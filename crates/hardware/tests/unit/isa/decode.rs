//! Instruction field extraction tests.

use pretty_assertions::assert_eq;
use rvstep_core::SimError;
use rvstep_core::common::constants::SENTINEL;
use rvstep_core::isa::decode::decode;
use rvstep_core::isa::instruction::{Decoded, OpClass};

use crate::common::builder::instruction::*;

#[test]
fn addi_fields() {
    let inst = addi(1, 0, 5);
    assert_eq!(inst, 0x0050_0093);
    assert_eq!(
        decode(inst).unwrap(),
        Decoded {
            raw: inst,
            class: OpClass::Imm,
            opcode: 0b0010011,
            rd: 1,
            rs1: 0,
            rs2: 5,
            funct3: 0,
            funct7: 0,
            imm: 5,
        }
    );
}

#[test]
fn r_type_has_zero_immediate() {
    let d = decode(sub(3, 4, 5)).unwrap();
    assert_eq!(d.class, OpClass::Reg);
    assert_eq!((d.rd, d.rs1, d.rs2), (3, 4, 5));
    assert_eq!(d.funct7, 0b0100000);
    assert_eq!(d.imm, 0);
}

#[test]
fn classes_follow_opcode() {
    let cases = [
        (add(1, 2, 3), OpClass::Reg, "R"),
        (ori(1, 2, 3), OpClass::Imm, "I"),
        (lw(1, 2, 0), OpClass::Load, "I"),
        (jalr(1, 2, 0), OpClass::Jalr, "I"),
        (sw(1, 2, 0), OpClass::Store, "S"),
        (bne(1, 2, 8), OpClass::Branch, "SB"),
        (lui(1, 0x12345), OpClass::Lui, "U"),
        (auipc(1, 0x1), OpClass::Auipc, "U"),
        (jal(1, 16), OpClass::Jal, "UJ"),
    ];
    for (inst, class, format) in cases {
        let d = decode(inst).unwrap();
        assert_eq!(d.class, class, "{inst:#010x}");
        assert_eq!(class.format(), format);
    }
}

#[test]
fn unknown_opcode_is_rejected() {
    // FENCE is outside the supported subset.
    let fence = 0x0FF0_000F;
    assert_eq!(
        decode(fence),
        Err(SimError::UnsupportedOpcode {
            inst: fence,
            opcode: 0x0F
        })
    );
    assert!(decode(0).is_err());
}

#[test]
fn sentinel_opcode_aliases_jal() {
    // 0xDEADBEEF carries opcode 0x6F (JAL) in its low bits, so only the
    // decode stage can tell it apart.
    assert_eq!(OpClass::from_opcode(SENTINEL & 0x7F), Some(OpClass::Jal));
}

#[test]
fn operand_usage_by_class() {
    assert!(OpClass::Store.reads_rs2());
    assert!(OpClass::Branch.reads_rs2());
    assert!(!OpClass::Imm.reads_rs2());
    assert!(OpClass::Jalr.reads_rs1());
    assert!(!OpClass::Jal.reads_rs1());
    assert!(!OpClass::Lui.reads_rs1());
}
