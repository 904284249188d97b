//! GSM 7-bit 알파벳 테이블
//!
//! 기본 알파벳 128 문자와, escape 를 통해서만 표현되는 확장 문자 10 개.
//! 멤버십은 code point 정확 일치로만 판단합니다 (대소문자 무시나 정규화 없음).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// 기본 알파벳. ESC(0x1B) 자리는 NBSP(U+00A0) 로 채워져 있습니다.
pub const GSM_ALPHABET: &str = concat!(
    "@£$¥èéùìòç\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞ\u{A0}ÆæßÉ",
    " !\"#¤%&'()*+,-./0123456789:;<=>?",
    "¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§",
    "¿abcdefghijklmnopqrstuvwxyzäöñüà",
);

/// 확장 테이블 (escape + 문자, 2 슬롯)
pub const GSM_ALPHABET_EXTENDED: &str = "\u{0C}^{}\\[~]|€";

/// 문자 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GsmCharKind {
    /// 기본 알파벳 (1 슬롯)
    Standard,
    /// 확장 테이블 (escape 포함 2 슬롯)
    Extended,
    /// GSM 으로 표현 불가
    NotGsm,
}

impl GsmCharKind {
    pub fn is_gsm(&self) -> bool {
        !matches!(self, Self::NotGsm)
    }

    /// GSM 인코딩에서 차지하는 슬롯 수.
    ///
    /// `NotGsm` 은 대체 문자 하나로 바뀐다고 보고 1 슬롯.
    pub fn gsm_slots(&self) -> usize {
        match self {
            Self::Extended => 2,
            Self::Standard | Self::NotGsm => 1,
        }
    }
}

struct GsmTables {
    standard: HashSet<u16>,
    extended: HashSet<u16>,
}

static TABLES: OnceLock<GsmTables> = OnceLock::new();

fn tables() -> &'static GsmTables {
    TABLES.get_or_init(|| GsmTables {
        standard: GSM_ALPHABET.encode_utf16().collect(),
        extended: GSM_ALPHABET_EXTENDED.encode_utf16().collect(),
    })
}

/// UTF-16 code unit 하나를 분류
#[inline]
pub fn classify_unit(unit: u16) -> GsmCharKind {
    let tables = tables();
    if tables.standard.contains(&unit) {
        GsmCharKind::Standard
    } else if tables.extended.contains(&unit) {
        GsmCharKind::Extended
    } else {
        GsmCharKind::NotGsm
    }
}

/// 문자 하나를 분류. BMP 밖의 문자는 항상 `NotGsm`.
pub fn classify(c: char) -> GsmCharKind {
    u16::try_from(u32::from(c))
        .map(classify_unit)
        .unwrap_or(GsmCharKind::NotGsm)
}

pub fn is_standard_gsm(c: char) -> bool {
    classify(c) == GsmCharKind::Standard
}

pub fn is_extended_gsm(c: char) -> bool {
    classify(c) == GsmCharKind::Extended
}

/// 기본 또는 확장 GSM 문자인지
pub fn is_gsm_char(c: char) -> bool {
    classify(c).is_gsm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(GSM_ALPHABET.chars().count(), 128);
        assert_eq!(tables().standard.len(), 128);
        assert_eq!(GSM_ALPHABET_EXTENDED.chars().count(), 10);
        assert_eq!(tables().extended.len(), 10);
        assert!(tables().standard.is_disjoint(&tables().extended));
    }

    #[test]
    fn test_classify_standard() {
        for c in ['a', 'Z', '0', '@', '£', 'é', 'Δ', 'Ω', '\n', '\r', ' ', '\u{A0}'] {
            assert_eq!(classify(c), GsmCharKind::Standard, "{:?}", c);
        }
    }

    #[test]
    fn test_classify_extended() {
        for c in ['^', '{', '}', '\\', '[', '~', ']', '|', '€', '\u{0C}'] {
            assert_eq!(classify(c), GsmCharKind::Extended, "{:?}", c);
            assert_eq!(classify(c).gsm_slots(), 2);
        }
    }

    #[test]
    fn test_classify_not_gsm() {
        // 백틱, 소문자 그리스 문자, 대문자 È, 이모지
        for c in ['`', 'δ', 'È', 'ж', '\t', '\u{1B}', '\u{1F600}', '\u{2019}'] {
            assert_eq!(classify(c), GsmCharKind::NotGsm, "{:?}", c);
            assert!(!is_gsm_char(c));
        }
    }

    #[test]
    fn test_no_case_folding() {
        // 'ä' 와 'Ä' 는 둘 다 있지만 'ë' / 'Ë' 는 없음
        assert!(is_standard_gsm('ä'));
        assert!(is_standard_gsm('Ä'));
        assert!(!is_gsm_char('ë'));
        assert!(!is_gsm_char('Ë'));
    }

    #[test]
    fn test_surrogate_units_are_not_gsm() {
        assert_eq!(classify_unit(0xD83D), GsmCharKind::NotGsm);
        assert_eq!(classify_unit(0xDE00), GsmCharKind::NotGsm);
    }

    #[test]
    fn test_slots() {
        assert_eq!(GsmCharKind::Standard.gsm_slots(), 1);
        assert_eq!(GsmCharKind::Extended.gsm_slots(), 2);
        assert_eq!(GsmCharKind::NotGsm.gsm_slots(), 1);
        assert!(is_extended_gsm('€'));
    }
}
