//! Fixture table shape and ground-truth agreement.
//!
//! The tables are external generator output; these tests pin down the
//! structural invariants the runner relies on and cross-check every
//! vector against the independent software model.

use zbcheck_core::exec::{Emulator, Executor};
use zbcheck_core::fixtures::{Group, Src2};
use zbcheck_core::isa::{Extension, OperandPattern};

#[test]
fn sixteen_vectors_per_instruction() {
    for group in Group::ALL {
        for table in group.tables() {
            assert_eq!(table.len(), 16, "table {} in {group}", table[0].op);
        }
    }
}

#[test]
fn group_sizes() {
    assert_eq!(Group::Zba.len(), 48);
    assert_eq!(Group::ZbbMinMax.len(), 64);
    assert_eq!(Group::ZbbMisc.len(), 224);
    assert_eq!(Group::Zbs.len(), 128);
    let total: usize = Group::ALL.iter().map(|g| g.len()).sum();
    assert_eq!(total, 464);
}

/// Every table holds vectors of a single instruction.
#[test]
fn tables_are_homogeneous() {
    for group in Group::ALL {
        for table in group.tables() {
            let op = table[0].op;
            assert!(table.iter().all(|v| v.op == op), "mixed table in {group}");
        }
    }
}

/// Group membership matches the ISA model's extension assignment.
#[test]
fn groups_respect_extensions() {
    let expected = [
        (Group::Zba, Extension::Zba),
        (Group::ZbbMinMax, Extension::Zbb),
        (Group::ZbbMisc, Extension::Zbb),
        (Group::Zbs, Extension::Zbs),
    ];
    for (group, ext) in expected {
        for table in group.tables() {
            for vector in *table {
                assert_eq!(vector.op.extension(), ext, "{} in {group}", vector.op);
            }
        }
    }
}

/// A vector's stored operand shape matches its instruction's encoding.
#[test]
fn vectors_match_operand_patterns() {
    for group in Group::ALL {
        for table in group.tables() {
            for vector in *table {
                let ok = match vector.src2 {
                    Src2::Reg(_) => vector.op.operands() == OperandPattern::RegReg,
                    Src2::Imm(imm) => {
                        imm < 32 && vector.op.operands() == OperandPattern::RegImm
                    }
                    Src2::None => vector.op.operands() == OperandPattern::Unary,
                };
                assert!(ok, "{} with {:?}", vector.op, vector.src2);
            }
        }
    }
}

/// `rs1` is unique within each table; the fault-injecting test executor
/// keys on (mnemonic, rs1) and relies on this.
#[test]
fn rs1_unique_within_each_table() {
    for group in Group::ALL {
        for table in group.tables() {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.rs1, b.rs1, "duplicate rs1 in {}", a.op);
                }
            }
        }
    }
}

/// Ground truth: all 464 expected values agree with the independent
/// software implementation of the instruction semantics.
#[test]
fn every_vector_agrees_with_software_model() {
    for group in Group::ALL {
        for table in group.tables() {
            for vector in *table {
                let actual = Emulator.execute(vector.op, vector.rs1, vector.src2_value());
                assert_eq!(
                    actual, vector.expected,
                    "{} rs1={:#x} src2={:?}",
                    vector.op, vector.rs1, vector.src2
                );
            }
        }
    }
}
