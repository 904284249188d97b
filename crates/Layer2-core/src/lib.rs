//! smsseg-core: SMS 세그먼트 계산 엔진
//!
//! Layer2 - 카운트/분할/정규화 레이어
//!
//! # 주요 모듈
//!
//! - `counter`: 한 번의 순회로 GSM / UCS-2 두 가정을 동시에 계산
//! - `splitter`: 인코딩별 분할기 (`GsmSplitter`, `Ucs2Splitter`)
//! - `segmenter`: 인코딩 자동 선택 + 단일/연결 메시지 선택
//! - `selector`: 인코딩 선택 (GSM 은 전부 아니면 전무)
//! - `sizing`: 슬롯/바이트 수 계산
//! - `normalizer`: 타이포그래피 치환 + 비 GSM 문자 대체
//!
//! 모든 연산은 `&str` 형태와 UTF-16 code unit 을 받는 `_utf16` 형태가 있습니다.
//! 짝이 맞지 않는 surrogate 를 다루려면 `_utf16` 형태를 쓰세요.
//!
//! # 사용 예시
//!
//! ```
//! use smsseg_core::{count_segments_for_selected_encoding, split_into_segments, Encoding};
//!
//! let count = count_segments_for_selected_encoding("Hello {world}");
//! assert_eq!(count.encoding, Encoding::Gsm);
//! assert_eq!(count.char_count, 15);
//!
//! let split = split_into_segments(&"a".repeat(200));
//! assert_eq!(split.msg_count(), 2);
//! assert_eq!(split.chars_per_segment, 153);
//! ```

pub mod counter;
pub mod normalizer;
pub mod segmenter;
pub mod selector;
pub mod sizing;
pub mod splitter;

// Re-exports: Core components
pub use counter::SegmentCounter;
pub use normalizer::TextNormalizer;
pub use segmenter::Segmenter;
pub use splitter::{splitter_for, GsmSplitter, SegmentSplitter, Ucs2Splitter};

// Re-exports: Foundation types
pub use smsseg_foundation::{
    classify, classify_unit, CapacityModel, CharCount, CharCountInfo, CharSlot, Encoding,
    GsmCharKind, Segment, SelectedCharCount, SmsText, SplitResult,
};

fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

// ============================================================================
// Encoding selection
// ============================================================================

/// 모든 문자가 기본/확장 GSM 인지
pub fn is_gsm_representable(text: &str) -> bool {
    is_gsm_representable_utf16(&utf16(text))
}

pub fn is_gsm_representable_utf16(units: &[u16]) -> bool {
    selector::is_gsm_representable(units)
}

/// GSM 이면 `Gsm`, 아니면 `Ucs2`
pub fn select_encoding(text: &str) -> Encoding {
    select_encoding_utf16(&utf16(text))
}

pub fn select_encoding_utf16(units: &[u16]) -> Encoding {
    selector::select_encoding(units)
}

// ============================================================================
// Counting
// ============================================================================

/// GSM / UCS-2 두 가정의 문자/메시지 수
pub fn count_segments(text: &str) -> CharCountInfo {
    count_segments_utf16(&utf16(text))
}

pub fn count_segments_utf16(units: &[u16]) -> CharCountInfo {
    SegmentCounter::default().count(units)
}

/// 용량 모델을 지정한 `count_segments`
pub fn count_segments_with(text: &str, capacity: &CapacityModel) -> CharCountInfo {
    count_segments_with_utf16(&utf16(text), capacity)
}

pub fn count_segments_with_utf16(units: &[u16], capacity: &CapacityModel) -> CharCountInfo {
    SegmentCounter::new(*capacity).count(units)
}

/// 실제 사용될 인코딩 쪽 결과만
pub fn count_segments_for_selected_encoding(text: &str) -> SelectedCharCount {
    count_segments_for_selected_encoding_utf16(&utf16(text))
}

pub fn count_segments_for_selected_encoding_utf16(units: &[u16]) -> SelectedCharCount {
    count_segments_utf16(units).selected()
}

// ============================================================================
// Splitting
// ============================================================================

/// 인코딩과 단일/연결 용량을 자동으로 골라 분할
pub fn split_into_segments(text: &str) -> SplitResult {
    split_into_segments_utf16(&utf16(text))
}

pub fn split_into_segments_utf16(units: &[u16]) -> SplitResult {
    Segmenter::default().split(units)
}

/// 용량 모델을 지정한 `split_into_segments`
pub fn split_into_segments_with(text: &str, capacity: &CapacityModel) -> SplitResult {
    split_into_segments_with_utf16(&utf16(text), capacity)
}

pub fn split_into_segments_with_utf16(units: &[u16], capacity: &CapacityModel) -> SplitResult {
    Segmenter::new(*capacity).split(units)
}

/// 인코딩을 강제하고 단일/연결 용량만 자동 선택
pub fn split_as(text: &str, encoding: Encoding) -> SplitResult {
    split_as_utf16(&utf16(text), encoding)
}

pub fn split_as_utf16(units: &[u16], encoding: Encoding) -> SplitResult {
    Segmenter::default().split_as(units, encoding)
}

/// 파트당 `bytes_per_segment` 바이트로 GSM 분할 (최소 2 바이트)
pub fn split_gsm(text: &str, bytes_per_segment: usize) -> SplitResult {
    split_gsm_utf16(&utf16(text), bytes_per_segment)
}

pub fn split_gsm_utf16(units: &[u16], bytes_per_segment: usize) -> SplitResult {
    GsmSplitter.split(units, bytes_per_segment)
}

/// 파트당 `bytes_per_segment` 바이트로 UCS-2 분할 (최소 4 바이트)
pub fn split_ucs2(text: &str, bytes_per_segment: usize) -> SplitResult {
    split_ucs2_utf16(&utf16(text), bytes_per_segment)
}

pub fn split_ucs2_utf16(units: &[u16], bytes_per_segment: usize) -> SplitResult {
    Ucs2Splitter.split(units, bytes_per_segment)
}

// ============================================================================
// Sizing
// ============================================================================

pub fn gsm_extended_char_count(text: &str) -> usize {
    sizing::gsm_extended_char_count(&utf16(text))
}

pub fn gsm_slot_count(text: &str) -> usize {
    sizing::gsm_slot_count(&utf16(text))
}

pub fn gsm_byte_length(text: &str) -> usize {
    sizing::gsm_byte_length(&utf16(text))
}

pub fn ucs2_byte_length(text: &str) -> usize {
    sizing::ucs2_byte_length(&utf16(text))
}

/// 문자별 슬롯 목록
pub fn char_slots(text: &str, encoding: Encoding) -> Vec<CharSlot> {
    char_slots_utf16(&utf16(text), encoding)
}

pub fn char_slots_utf16(units: &[u16], encoding: Encoding) -> Vec<CharSlot> {
    sizing::char_slots(units, encoding)
}

// ============================================================================
// Normalization
// ============================================================================

/// 타이포그래피 치환 후 비 GSM 문자를 `?` 로
pub fn normalize_and_replace(text: &str) -> String {
    normalize_and_replace_with(text, smsseg_foundation::DEFAULT_REPLACEMENT)
}

/// 타이포그래피 치환 후 비 GSM 문자를 `replacement` 로
pub fn normalize_and_replace_with(text: &str, replacement: &str) -> String {
    normalize_and_replace_utf16(&utf16(text), replacement).to_string_lossy()
}

pub fn normalize_and_replace_utf16(units: &[u16], replacement: &str) -> SmsText {
    TextNormalizer::new(replacement).normalize(units)
}

/// 비 GSM 문자만 `replacement` 로 (타이포그래피 치환 없음)
pub fn replace_non_gsm(text: &str, replacement: &str) -> String {
    replace_non_gsm_utf16(&utf16(text), replacement).to_string_lossy()
}

pub fn replace_non_gsm_utf16(units: &[u16], replacement: &str) -> SmsText {
    TextNormalizer::new(replacement).replace_non_gsm(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_and_splitter_agree() {
        for text in [
            "",
            "asd",
            "`",
            "\u{1F600}",
            "a".repeat(161).as_str(),
            "[]".repeat(81).as_str(),
            "ж".repeat(135).as_str(),
        ] {
            let count = count_segments_for_selected_encoding(text);
            let split = split_into_segments(text);
            assert_eq!(count.encoding, split.encoding, "{text:?}");
            assert_eq!(count.msg_count, split.msg_count(), "{text:?}");
            assert_eq!(count.char_count, split.padded_char_count(), "{text:?}");
            assert_eq!(count.chars_per_segment, split.chars_per_segment, "{text:?}");
        }
    }

    #[test]
    fn test_utf16_forms_accept_lone_surrogates() {
        let units = [0x61, 0xD83D];
        assert!(!is_gsm_representable_utf16(&units));
        assert_eq!(select_encoding_utf16(&units), Encoding::Ucs2);
        let split = split_into_segments_utf16(&units);
        assert_eq!(split.joined_text().as_units(), &units);
        assert_eq!(count_segments_utf16(&units).ucs2_char_count.char_count, 2);
    }

    #[test]
    fn test_sizing_wrappers() {
        assert_eq!(gsm_extended_char_count("a{b}"), 2);
        assert_eq!(gsm_slot_count("a{b}"), 6);
        assert_eq!(gsm_byte_length(&"a".repeat(8)), 7);
        assert_eq!(ucs2_byte_length("\u{1F600}"), 4);
    }

    #[test]
    fn test_huge_budgets_do_not_overflow() {
        let gsm = split_gsm("abc", usize::MAX);
        assert_eq!(gsm.msg_count(), 1);
        assert_eq!(gsm.parts[0].byte_count, 3);

        let ucs2 = split_ucs2("abc", usize::MAX);
        assert_eq!(ucs2.msg_count(), 1);
        assert_eq!(ucs2.chars_per_segment, usize::MAX / 2);

        let huge = CapacityModel::new(usize::MAX / 2, 6);
        assert_eq!(count_segments_with("abc", &huge).gsm_char_count.msg_count, 1);
        assert_eq!(split_into_segments_with("abc", &huge).msg_count(), 1);
    }

    #[test]
    fn test_tiny_capacity_counter_and_splitter_agree() {
        let tiny = CapacityModel::new(10, 8);
        let text = "ж".repeat(10);
        let count = count_segments_with(&text, &tiny).selected();
        let split = split_into_segments_with(&text, &tiny);
        assert_eq!(count.msg_count, 5);
        assert_eq!(count.msg_count, split.msg_count());
        assert_eq!(count.chars_per_segment, split.chars_per_segment);
    }

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(normalize_and_replace("“hi” ©"), "\"hi\" ?");
        assert_eq!(replace_non_gsm("“hi”", "_"), "_hi_");
    }
}
