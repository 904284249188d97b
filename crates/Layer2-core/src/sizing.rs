//! 크기 계산 헬퍼
//!
//! 분할 없이 텍스트 전체의 슬롯/바이트 수만 구합니다.

use smsseg_foundation::{
    classify_unit, gsm_bytes_for_chars, is_surrogate_pair_at, CharSlot, Encoding, GsmCharKind,
    SmsText,
};

/// 확장 GSM 문자(escape 가 필요한 문자) 개수
pub fn gsm_extended_char_count(units: &[u16]) -> usize {
    units
        .iter()
        .filter(|&&u| classify_unit(u) == GsmCharKind::Extended)
        .count()
}

/// GSM 슬롯 합계. 확장 문자는 2, 나머지(비 GSM 포함)는 1.
pub fn gsm_slot_count(units: &[u16]) -> usize {
    units.len() + gsm_extended_char_count(units)
}

/// 7-bit 로 패킹했을 때의 바이트 수
pub fn gsm_byte_length(units: &[u16]) -> usize {
    gsm_bytes_for_chars(gsm_slot_count(units))
}

/// UCS-2 바이트 수 (code unit 당 2 바이트, surrogate pair 는 4 바이트)
pub fn ucs2_byte_length(units: &[u16]) -> usize {
    units.len() * 2
}

/// 문자별 슬롯 목록.
///
/// - GSM: code unit 마다 한 항목, 확장 문자는 2 슬롯
/// - UCS-2: 온전한 surrogate pair 는 한 항목으로 합쳐 2 슬롯, 나머지는 1 슬롯
pub fn char_slots(units: &[u16], encoding: Encoding) -> Vec<CharSlot> {
    match encoding {
        Encoding::Gsm => units
            .iter()
            .map(|&u| CharSlot {
                text: SmsText::from_units(vec![u]),
                slots: classify_unit(u).gsm_slots(),
            })
            .collect(),
        Encoding::Ucs2 => {
            let mut slots = Vec::with_capacity(units.len());
            let mut i = 0;
            while i < units.len() {
                let width = if is_surrogate_pair_at(units, i) { 2 } else { 1 };
                slots.push(CharSlot {
                    text: SmsText::from(&units[i..i + width]),
                    slots: width,
                });
                i += width;
            }
            slots
        }
    }
}
