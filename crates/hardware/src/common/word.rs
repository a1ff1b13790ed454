//! Hex formatting for words and bytes.
//!
//! Snapshots and traces present values the way the datapath diagram labels
//! them: `0x` followed by eight uppercase digits for words and two for bytes.

/// Formats a word as `0x` plus eight uppercase hex digits.
///
/// # Arguments
///
/// * `val` - The 32-bit value to format.
///
/// # Returns
///
/// A string such as `0x7FFFFFDC`.
pub fn hex_word(val: u32) -> String {
    format!("0x{val:08X}")
}

/// Formats a byte as two uppercase hex digits without a prefix.
pub fn hex_byte(val: u8) -> String {
    format!("{val:02X}")
}

/// Formats an optional latch value, rendering an empty latch as `None`.
pub fn hex_latch(val: Option<u32>) -> Option<String> {
    val.map(hex_word)
}

/// Parses a `0x`-prefixed (case-insensitive) hexadecimal literal.
///
/// # Returns
///
/// `None` when the prefix is missing, any character after it is not a hex
/// digit (a sign included), or the value does not fit in 32 bits.
pub fn parse_hex(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Returns true when `text` carries a `0x` or `0X` prefix.
pub fn has_hex_prefix(text: &str) -> bool {
    text.starts_with("0x") || text.starts_with("0X")
}
