//! UTF-16 String Utilities
//!
//! SMS sizing works on UTF-16 code units, not on Rust `char`s: a UCS-2
//! segment holds 2 bytes per unit, and a surrogate pair must never be split.
//! Unpaired surrogate halves are valid input as well, which `&str` cannot
//! carry, so the owned text type here is a thin wrapper around `Vec<u16>`.
//!
//! # Usage
//!
//! ```
//! use smsseg_foundation::SmsText;
//!
//! let text = SmsText::from("a\u{1F600}b");
//! assert_eq!(text.len(), 4);
//! assert_eq!(text, "a\u{1F600}b");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

// ============================================================================
// Surrogate helpers
// ============================================================================

/// `0xD800..=0xDBFF`
#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= 0xD800 && unit <= 0xDBFF
}

/// `0xDC00..=0xDFFF`
#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= 0xDC00 && unit <= 0xDFFF
}

/// True if `units[index]` is a high surrogate immediately followed by a low one.
#[inline]
pub fn is_surrogate_pair_at(units: &[u16], index: usize) -> bool {
    match (units.get(index), units.get(index + 1)) {
        (Some(&high), Some(&low)) => is_high_surrogate(high) && is_low_surrogate(low),
        _ => false,
    }
}

/// True if `units[index]` is the low half of a pair started at `index - 1`.
#[inline]
pub fn is_pair_tail_at(units: &[u16], index: usize) -> bool {
    index > 0 && is_surrogate_pair_at(units, index - 1)
}

// ============================================================================
// SmsText
// ============================================================================

/// Owned UTF-16 text.
///
/// Equality and hashing are on code units. `Display` and serde go through a
/// lossy conversion, so unpaired surrogates show up as U+FFFD there.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SmsText {
    units: Vec<u16>,
}

impl SmsText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw code units without validation.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Copy of the code units in `range`. The range is clamped to the text.
    pub fn slice(&self, range: Range<usize>) -> SmsText {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        Self::from_units(self.units[start..end].to_vec())
    }

    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// `String` form, with U+FFFD for unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// `String` form, `None` if the text holds an unpaired surrogate.
    pub fn to_string_checked(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }
}

impl From<&str> for SmsText {
    fn from(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }
}

impl From<String> for SmsText {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[u16]> for SmsText {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units.to_vec())
    }
}

impl From<Vec<u16>> for SmsText {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl AsRef<[u16]> for SmsText {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl fmt::Display for SmsText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for SmsText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl PartialEq<str> for SmsText {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for SmsText {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for SmsText {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl Serialize for SmsText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl<'de> Deserialize<'de> for SmsText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

// ============================================================================
// Tests
// ============================================================================
