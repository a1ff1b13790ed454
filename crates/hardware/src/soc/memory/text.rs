//! Program text.
//!
//! Instruction words are kept apart from byte memory so that fetch never
//! observes data stores, matching the separate instruction memory on the
//! datapath diagram.

use std::collections::BTreeMap;

use crate::common::constants::SENTINEL;

/// Instruction memory mapping a PC to the word stored there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramText {
    words: BTreeMap<u32, u32>,
}

impl ProgramText {
    /// Creates empty program text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `word` at `pc`, replacing any earlier word.
    pub fn insert(&mut self, pc: u32, word: u32) {
        let _ = self.words.insert(pc, word);
    }

    /// Returns the word at `pc`, or the end-of-program sentinel if none was stored.
    pub fn fetch(&self, pc: u32) -> u32 {
        self.words.get(&pc).copied().unwrap_or(SENTINEL)
    }

    /// Returns the word at `pc` if one was stored.
    pub fn get(&self, pc: u32) -> Option<u32> {
        self.words.get(&pc).copied()
    }

    /// Number of stored words, the sentinel included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words were stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates `(pc, word)` pairs in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words.iter().map(|(pc, word)| (*pc, *word))
    }
}

impl FromIterator<(u32, u32)> for ProgramText {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
