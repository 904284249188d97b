//! GSM 7-bit 분할기

use super::traits::SegmentSplitter;
use crate::sizing::{gsm_byte_length, gsm_slot_count};
use smsseg_foundation::{
    classify_unit, fits, gsm_bytes_for_chars, gsm_chars_for_bytes, CapacityModel, Encoding,
    GsmCharKind, Segment, SmsText, SplitResult,
};
use tracing::trace;

/// GSM 이 아닌 문자가 파트 텍스트에 들어갈 때 쓰는 문자 (`?`)
const INVALID_CHAR_PLACEHOLDER: u16 = b'?' as u16;

/// 확장 문자의 escape 쌍을 파트 경계에서 자르지 않는 GSM 분할기
#[derive(Debug, Clone, Copy, Default)]
pub struct GsmSplitter;

impl GsmSplitter {
    /// 파트 하나를 닫기. GSM 이 아닌 unit 이 있었으면 `?` 로 바꿔 담음
    fn close(units: &[u16], slots: usize, has_invalid: bool) -> Segment {
        let text = if has_invalid {
            SmsText::from_units(units.iter().map(|&u| placeholder_for(u)).collect())
        } else {
            SmsText::from(units)
        };
        Segment::new(text, slots, gsm_bytes_for_chars(slots))
    }
}

/// GSM 이 아닌 unit 은 `?` 로
#[inline]
fn placeholder_for(unit: u16) -> u16 {
    if classify_unit(unit).is_gsm() {
        unit
    } else {
        INVALID_CHAR_PLACEHOLDER
    }
}

impl SegmentSplitter for GsmSplitter {
    fn encoding(&self) -> Encoding {
        Encoding::Gsm
    }

    fn min_segment_bytes(&self) -> usize {
        2
    }

    fn byte_length(&self, units: &[u16]) -> usize {
        gsm_byte_length(units)
    }

    fn split(&self, units: &[u16], bytes_per_segment: usize) -> SplitResult {
        let bytes_per_segment = bytes_per_segment.max(self.min_segment_bytes());
        let chars_per_segment = gsm_chars_for_bytes(bytes_per_segment);

        let mut parts = Vec::new();
        let mut start = 0;
        let mut remaining = chars_per_segment;
        let mut slots_used = 0;
        let mut has_invalid = false;

        for (pos, &unit) in units.iter().enumerate() {
            let kind = classify_unit(unit);
            let slots = kind.gsm_slots();

            if !fits(remaining, slots) {
                trace!(start, end = pos, slots = slots_used, "Closing GSM segment");
                parts.push(Self::close(&units[start..pos], slots_used, has_invalid));
                start = pos;
                remaining = chars_per_segment;
                slots_used = 0;
                has_invalid = false;
            }

            if kind == GsmCharKind::NotGsm {
                has_invalid = true;
            }
            remaining = remaining.saturating_sub(slots);
            slots_used += slots;
        }

        if start < units.len() {
            parts.push(Self::close(&units[start..], slots_used, has_invalid));
        }
        if parts.is_empty() {
            parts.push(Segment::empty());
        }

        SplitResult::new(Encoding::Gsm, parts, bytes_per_segment, chars_per_segment)
    }

    /// 단일 메시지는 텍스트를 그대로 담음 (`?` 치환은 분할 경로에서만)
    fn single(&self, units: &[u16], capacity: &CapacityModel) -> SplitResult {
        let slots = gsm_slot_count(units);

        SplitResult::new(
            Encoding::Gsm,
            vec![Self::close(units, slots, false)],
            capacity.single_segment_bytes(),
            capacity.single_segment_chars(Encoding::Gsm),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn shape(result: &SplitResult) -> Vec<(String, usize, usize)> {
        result
            .parts
            .iter()
            .map(|p| (p.text.to_string_lossy(), p.char_count, p.byte_count))
            .collect()
    }

    #[test]
    fn test_empty_text_yields_one_empty_part() {
        let result = GsmSplitter.split(&[], 134);
        assert_eq!(result.parts, vec![Segment::empty()]);
        assert_eq!(result.chars_per_segment, 153);
    }

    #[test]
    fn test_escape_pair_is_not_split() {
        // 예산 3 바이트 = 3 슬롯: "a" 다음 "[" 는 남은 2 슬롯에 들어가고, "]" 는 새 파트
        let result = GsmSplitter.split(&units("a[]"), 3);
        assert_eq!(result.chars_per_segment, 3);
        assert_eq!(
            shape(&result),
            vec![("a[".to_string(), 3, 3), ("]".to_string(), 2, 2)]
        );
    }

    #[test]
    fn test_early_cut_before_extended_char() {
        let text = units(&format!("{}[bbbbbbc", "a".repeat(152)));
        let result = GsmSplitter.split(&text, 134);
        assert_eq!(
            shape(&result),
            vec![("a".repeat(152), 152, 133), ("[bbbbbbc".to_string(), 9, 8)]
        );
        assert_eq!(result.padded_char_count(), 162);
    }

    #[test]
    fn test_budget_is_clamped() {
        let result = GsmSplitter.split(&units("{a"), 0);
        assert_eq!(result.bytes_per_segment, 2);
        assert_eq!(result.chars_per_segment, 2);
        assert_eq!(
            shape(&result),
            vec![("{".to_string(), 2, 2), ("a".to_string(), 1, 1)]
        );
    }

    #[test]
    fn test_invalid_chars_replaced_in_part_text() {
        let result = GsmSplitter.split(&units("abжcd"), 3);
        assert_eq!(
            shape(&result),
            vec![("ab?".to_string(), 3, 3), ("cd".to_string(), 2, 2)]
        );
    }

    #[test]
    fn test_single_uses_single_segment_capacity() {
        let result = GsmSplitter.single(&units("[]"), &CapacityModel::default());
        assert_eq!(result.bytes_per_segment, 140);
        assert_eq!(result.chars_per_segment, 160);
        assert_eq!(shape(&result), vec![("[]".to_string(), 4, 4)]);
    }

    #[test]
    fn test_single_keeps_non_gsm_text() {
        let result = GsmSplitter.single(&units("aж"), &CapacityModel::default());
        assert_eq!(shape(&result), vec![("aж".to_string(), 2, 2)]);
    }

    #[test]
    fn test_huge_budget_is_one_part() {
        let result = GsmSplitter.split(&units("a{b"), usize::MAX);
        assert_eq!(result.chars_per_segment, usize::MAX / 7);
        assert_eq!(shape(&result), vec![("a{b".to_string(), 4, 4)]);
    }

    #[test]
    fn test_split_for_sms_threshold() {
        let capacity = CapacityModel::default();
        let fits = units(&"a".repeat(160));
        assert!(GsmSplitter.fits_single(&fits, &capacity));
        assert_eq!(GsmSplitter.split_for_sms(&fits, &capacity).msg_count(), 1);

        let overflow = units(&"a".repeat(161));
        assert!(!GsmSplitter.fits_single(&overflow, &capacity));
        let result = GsmSplitter.split_for_sms(&overflow, &capacity);
        assert_eq!(result.msg_count(), 2);
        assert_eq!(result.bytes_per_segment, 134);
    }
}
