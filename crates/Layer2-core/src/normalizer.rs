//! Text Normalizer - 타이포그래피 문자 치환 + 비 GSM 문자 대체
//!
//! 1. 둥근 따옴표, 백틱, 말줄임표, en/em 대시를 GSM 문자로 바꿉니다.
//! 2. 남은 비 GSM code unit 을 대체 문자열로 바꿉니다.
//!
//! 치환은 UTF-16 code unit 단위입니다. 그래서 BMP 밖의 문자(이모지 등)는
//! 대체 문자열 두 개가 됩니다.

use smsseg_foundation::{classify_unit, SmsText, DEFAULT_REPLACEMENT};
use tracing::debug;

/// GSM 으로 옮길 수 있는 타이포그래피 문자
const TYPOGRAPHIC_REWRITES: &[(u16, &str)] = &[
    (0x2018, "'"), // ‘
    (0x2019, "'"), // ’
    (0x201A, "'"), // ‚
    (0x0060, "'"), // `
    (0x201C, "\""), // “
    (0x201D, "\""), // ”
    (0x201E, "\""), // „
    (0x00AB, "\""), // «
    (0x00BB, "\""), // »
    (0x2026, "..."), // …
    (0x2013, "-"), // –
    (0x2014, "-"), // —
];

fn typographic_rewrite(unit: u16) -> Option<&'static str> {
    TYPOGRAPHIC_REWRITES
        .iter()
        .find(|(from, _)| *from == unit)
        .map(|(_, to)| *to)
}

// ============================================================================
// TextNormalizer
// ============================================================================

/// 대체 문자열을 가진 정규화기
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNormalizer {
    replacement: Vec<u16>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_REPLACEMENT)
    }
}

impl TextNormalizer {
    pub fn new(replacement: &str) -> Self {
        Self {
            replacement: replacement.encode_utf16().collect(),
        }
    }

    /// 대체 문자열 (UTF-16)
    pub fn replacement(&self) -> &[u16] {
        &self.replacement
    }

    /// 타이포그래피 치환 후 비 GSM unit 대체
    pub fn normalize(&self, units: &[u16]) -> SmsText {
        let mut out = SmsText::from_units(Vec::with_capacity(units.len()));
        let mut replaced = 0usize;

        for &unit in units {
            if let Some(rewrite) = typographic_rewrite(unit) {
                out.push_str(rewrite);
            } else if classify_unit(unit).is_gsm() {
                out.push_unit(unit);
            } else {
                replaced += 1;
                self.push_replacement(&mut out);
            }
        }

        debug!(units = units.len(), replaced, "Normalized text");
        out
    }

    /// 타이포그래피 치환 없이 비 GSM unit 만 대체
    pub fn replace_non_gsm(&self, units: &[u16]) -> SmsText {
        let mut out = SmsText::from_units(Vec::with_capacity(units.len()));
        for &unit in units {
            if classify_unit(unit).is_gsm() {
                out.push_unit(unit);
            } else {
                self.push_replacement(&mut out);
            }
        }
        out
    }

    fn push_replacement(&self, out: &mut SmsText) {
        for &unit in &self.replacement {
            out.push_unit(unit);
        }
    }
}
