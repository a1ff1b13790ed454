//! Datapath stage identifiers.

use std::fmt;

/// One of the five stages an instruction passes through.
///
/// The stages run strictly in declaration order and wrap from `Writeback`
/// back to `Fetch` for the next instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch (IF).
    #[default]
    Fetch,
    /// Instruction decode and register read (ID).
    Decode,
    /// ALU or branch evaluation (EX).
    Execute,
    /// Memory access and PC resolution (MEM).
    Memory,
    /// Register write-back (WB).
    Writeback,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Returns the stage that follows `self`.
    pub const fn next(self) -> Self {
        match self {
            Self::Fetch => Self::Decode,
            Self::Decode => Self::Execute,
            Self::Execute => Self::Memory,
            Self::Memory => Self::Writeback,
            Self::Writeback => Self::Fetch,
        }
    }

    /// Returns the short mnemonic used in traces (`IF`, `ID`, `EX`, `MEM`, `WB`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Execute => "execute",
            Self::Memory => "memory",
            Self::Writeback => "write-back",
        };
        f.write_str(name)
    }
}
