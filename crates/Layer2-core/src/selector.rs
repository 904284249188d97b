//! Encoding Selector
//!
//! GSM 은 전부 아니면 전무: 모든 code unit 이 기본/확장 GSM 이어야 GSM.

use smsseg_foundation::{classify_unit, Encoding};

/// 모든 code unit 이 GSM 알파벳에 속하는지
pub fn is_gsm_representable(units: &[u16]) -> bool {
    units.iter().all(|&u| classify_unit(u).is_gsm())
}

/// 텍스트 전체에 사용할 인코딩
pub fn select_encoding(units: &[u16]) -> Encoding {
    if is_gsm_representable(units) {
        Encoding::Gsm
    } else {
        Encoding::Ucs2
    }
}
