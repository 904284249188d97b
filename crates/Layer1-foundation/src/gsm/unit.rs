//! 분류된 code unit

use super::alphabet::{classify_unit, GsmCharKind};
use crate::strings::{is_high_surrogate, is_low_surrogate, is_pair_tail_at, is_surrogate_pair_at};

/// UTF-16 code unit 하나와 두 인코딩에서의 슬롯 크기.
///
/// - `gsm_slots`: 확장 문자 2, 그 외 1 (GSM 이 아닌 문자는 대체 문자 1 개로 가정)
/// - `ucs2_slots`: 보통 1. 온전한 surrogate pair 는 high 쪽이 2, low 쪽이 0
///   (이미 앞에서 센 절반이라 다시 세지 않음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharUnit {
    pub unit: u16,
    pub kind: GsmCharKind,
    pub gsm_slots: usize,
    pub ucs2_slots: usize,
}

impl CharUnit {
    /// `units[index]` 를 분류합니다. `index` 는 범위 안이어야 합니다.
    pub fn at(units: &[u16], index: usize) -> Self {
        let unit = units[index];
        let kind = classify_unit(unit);

        let ucs2_slots = if kind.is_gsm() {
            1
        } else if is_high_surrogate(unit) && is_surrogate_pair_at(units, index) {
            2
        } else if is_low_surrogate(unit) && is_pair_tail_at(units, index) {
            0
        } else {
            1
        };

        Self {
            unit,
            kind,
            gsm_slots: kind.gsm_slots(),
            ucs2_slots,
        }
    }

    /// 텍스트 전체를 앞에서부터 분류
    pub fn iter(units: &[u16]) -> impl Iterator<Item = CharUnit> + '_ {
        (0..units.len()).map(move |i| Self::at(units, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_plain_and_extended() {
        let text = units("a€");
        let a = CharUnit::at(&text, 0);
        assert_eq!((a.kind, a.gsm_slots, a.ucs2_slots), (GsmCharKind::Standard, 1, 1));

        let euro = CharUnit::at(&text, 1);
        assert_eq!((euro.kind, euro.gsm_slots, euro.ucs2_slots), (GsmCharKind::Extended, 2, 1));
    }

    #[test]
    fn test_surrogate_pair_slots() {
        let text = units("\u{1F600}");
        let slots: Vec<(usize, usize)> = CharUnit::iter(&text)
            .map(|u| (u.gsm_slots, u.ucs2_slots))
            .collect();
        assert_eq!(slots, vec![(1, 2), (1, 0)]);
    }

    #[test]
    fn test_orphan_halves_cost_one() {
        // low, high 순서는 pair 가 아님
        let text = vec![0xDE00, 0xD83D];
        let slots: Vec<usize> = CharUnit::iter(&text).map(|u| u.ucs2_slots).collect();
        assert_eq!(slots, vec![1, 1]);
    }

    #[test]
    fn test_not_gsm_bmp_char() {
        let text = units("ж");
        let unit = CharUnit::at(&text, 0);
        assert_eq!(unit.kind, GsmCharKind::NotGsm);
        assert_eq!((unit.gsm_slots, unit.ucs2_slots), (1, 1));
    }
}
