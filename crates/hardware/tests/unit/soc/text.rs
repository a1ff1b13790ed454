//! Program text tests.

use rvstep_core::common::constants::SENTINEL;
use rvstep_core::soc::ProgramText;

#[test]
fn missing_words_read_as_sentinel() {
    let text: ProgramText = [(0x0, 0x13), (0x4, 0x93)].into_iter().collect();
    assert_eq!(text.fetch(0x4), 0x93);
    assert_eq!(text.fetch(0x8), SENTINEL);
    assert_eq!(text.get(0x8), None);
    assert_eq!(text.len(), 2);
}

#[test]
fn later_insert_replaces() {
    let mut text = ProgramText::new();
    text.insert(0, 1);
    text.insert(0, 2);
    assert_eq!(text.fetch(0), 2);
    assert_eq!(text.len(), 1);
}
