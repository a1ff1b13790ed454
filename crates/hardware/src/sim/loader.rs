//! Program Loader.
//!
//! This module reads the text the assembler emits. It performs:
//! 1. **Instruction section:** `<address> <word> [comment]` lines fill program text, and each
//!    word is also copied into byte memory as four little-endian bytes.
//! 2. **Section switch:** The line carrying the sentinel word is stored in program text and
//!    ends the instruction section.
//! 3. **Data section:** Subsequent `<address> <byte>` lines are written into byte memory.
//!
//! Literals are `0x`-prefixed hexadecimal in either case. Lines with fewer than two tokens are
//! skipped, as are lines whose address lacks the prefix (assembler banners and headings).

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::constants::SENTINEL;
use crate::common::word::{has_hex_prefix, parse_hex};
use crate::soc::{ByteMemory, ProgramText};

/// Maximum number of whitespace-separated fields considered per line; the rest is a comment.
const MAX_FIELDS: usize = 3;

/// Errors raised while loading a program.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("failed to read program: {0}")]
    Io(#[from] std::io::Error),

    /// A line looked like program content but could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// A parsed program: instruction words plus initial data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words keyed by address, including the sentinel.
    pub text: ProgramText,
    /// Initial byte memory (instruction bytes and the data section).
    pub memory: ByteMemory,
}

/// Section of the input currently being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Text,
    Data,
}

/// Parses assembler output.
///
/// # Arguments
///
/// * `source` - The full text of the program listing.
///
/// # Returns
///
/// The parsed [`Program`], or [`LoadError::Parse`] naming the first malformed line.
pub fn parse(source: &str) -> Result<Program, LoadError> {
    let mut program = Program::default();
    let mut section = Section::Text;

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().take(MAX_FIELDS).collect();
        let [addr_text, value_text, ..] = fields.as_slice() else {
            continue;
        };
        if !has_hex_prefix(addr_text) {
            debug!(line, "skipping line without a hex address: {raw:?}");
            continue;
        }
        let addr = parse_hex(addr_text).ok_or_else(|| LoadError::Parse {
            line,
            reason: format!("invalid address {addr_text:?}"),
        })?;

        match section {
            Section::Text => {
                let word = parse_hex(value_text).ok_or_else(|| LoadError::Parse {
                    line,
                    reason: format!("invalid instruction word {value_text:?}"),
                })?;
                program.text.insert(addr, word);
                if word == SENTINEL {
                    debug!(line, "end of instruction section at {addr:#010x}");
                    section = Section::Data;
                } else {
                    program.memory.load(addr, &word.to_le_bytes());
                }
            }
            Section::Data => {
                if !has_hex_prefix(value_text) {
                    warn!(line, "skipping data line without a hex byte: {raw:?}");
                    continue;
                }
                let byte = parse_hex(value_text)
                    .and_then(|val| u8::try_from(val).ok())
                    .ok_or_else(|| LoadError::Parse {
                        line,
                        reason: format!("invalid data byte {value_text:?}"),
                    })?;
                program.memory.load(addr, &[byte]);
            }
        }
    }

    debug!(
        words = program.text.len(),
        bytes = program.memory.len(),
        "program parsed"
    );
    Ok(program)
}

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the assembler output.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Parse`] if its contents are malformed.
pub fn load_file(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}
