//! UCS-2 분할기

use super::traits::SegmentSplitter;
use crate::sizing::ucs2_byte_length;
use smsseg_foundation::{
    fits, is_surrogate_pair_at, ucs2_chars_for_bytes, CapacityModel, Encoding, Segment, SmsText,
    SplitResult,
};
use tracing::trace;

/// surrogate pair 를 파트 경계에서 자르지 않는 UCS-2 분할기
///
/// 짝이 맞지 않는 surrogate 는 일반 2 바이트 unit 으로 취급합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ucs2Splitter;

fn ucs2_segment(units: &[u16]) -> Segment {
    Segment::new(SmsText::from(units), units.len(), ucs2_byte_length(units))
}

impl SegmentSplitter for Ucs2Splitter {
    fn encoding(&self) -> Encoding {
        Encoding::Ucs2
    }

    fn min_segment_bytes(&self) -> usize {
        4
    }

    fn byte_length(&self, units: &[u16]) -> usize {
        ucs2_byte_length(units)
    }

    fn split(&self, units: &[u16], bytes_per_segment: usize) -> SplitResult {
        let bytes_per_segment = bytes_per_segment.max(self.min_segment_bytes());

        let mut parts = Vec::new();
        let mut start = 0;
        let mut remaining = bytes_per_segment;
        let mut pos = 0;

        while pos < units.len() {
            // 온전한 pair 는 4 바이트짜리 한 단위
            let size = if is_surrogate_pair_at(units, pos) { 4 } else { 2 };

            if !fits(remaining, size) {
                trace!(start, end = pos, "Closing UCS-2 segment");
                parts.push(ucs2_segment(&units[start..pos]));
                start = pos;
                remaining = bytes_per_segment;
            }

            remaining = remaining.saturating_sub(size);
            pos += size / 2;
        }

        if start < units.len() {
            parts.push(ucs2_segment(&units[start..]));
        }
        if parts.is_empty() {
            parts.push(Segment::empty());
        }

        SplitResult::new(
            Encoding::Ucs2,
            parts,
            bytes_per_segment,
            ucs2_chars_for_bytes(bytes_per_segment),
        )
    }

    fn single(&self, units: &[u16], capacity: &CapacityModel) -> SplitResult {
        SplitResult::new(
            Encoding::Ucs2,
            vec![ucs2_segment(units)],
            capacity.single_segment_bytes(),
            capacity.single_segment_chars(Encoding::Ucs2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn sizes(result: &SplitResult) -> Vec<(usize, usize)> {
        result
            .parts
            .iter()
            .map(|p| (p.char_count, p.byte_count))
            .collect()
    }

    #[test]
    fn test_empty_text_yields_one_empty_part() {
        let result = Ucs2Splitter.split(&[], 134);
        assert_eq!(result.parts, vec![Segment::empty()]);
        assert_eq!(result.chars_per_segment, 67);
    }

    #[test]
    fn test_pair_moves_to_next_segment() {
        let text = units(&format!("{}\u{1F600}{}", "a".repeat(66), "a".repeat(10)));
        let result = Ucs2Splitter.split(&text, 134);
        assert_eq!(sizes(&result), vec![(66, 132), (12, 24)]);
        assert_eq!(result.padded_char_count(), 79);
        assert!(result.parts[1].text.as_units().starts_with(&[0xD83D, 0xDE00]));
    }

    #[test]
    fn test_budget_is_clamped() {
        let text = units("\u{1F600}\u{1F600}");
        let result = Ucs2Splitter.split(&text, 1);
        assert_eq!(result.bytes_per_segment, 4);
        assert_eq!(result.chars_per_segment, 2);
        assert_eq!(sizes(&result), vec![(2, 4), (2, 4)]);
    }

    #[test]
    fn test_orphan_surrogates_are_plain_units() {
        // high 다음에 low 가 없고, low 앞에 high 가 없음
        let text = vec![0xD83D, 0x0061, 0xDE00, 0x0062];
        let result = Ucs2Splitter.split(&text, 4);
        assert_eq!(sizes(&result), vec![(2, 4), (2, 4)]);
        assert_eq!(result.joined_text().as_units(), text.as_slice());
    }

    #[test]
    fn test_odd_budget_leaves_padding() {
        let result = Ucs2Splitter.split(&units("abc"), 5);
        assert_eq!(result.chars_per_segment, 2);
        assert_eq!(sizes(&result), vec![(2, 4), (1, 2)]);
    }

    #[test]
    fn test_single_uses_single_segment_capacity() {
        let result = Ucs2Splitter.single(&units("\u{1F600}"), &CapacityModel::default());
        assert_eq!(result.bytes_per_segment, 140);
        assert_eq!(result.chars_per_segment, 70);
        assert_eq!(sizes(&result), vec![(2, 4)]);
    }
}
