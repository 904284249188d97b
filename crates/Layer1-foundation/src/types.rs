//! 세그먼트 계산 결과 타입
//!
//! 모두 호출마다 새로 만들어지는 값이며 반환 후 변경되지 않습니다.

use crate::capacity::Encoding;
use crate::strings::SmsText;
use serde::{Deserialize, Serialize};

// ============================================================================
// Segment / SplitResult
// ============================================================================

/// 분할된 메시지 파트 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// 파트 텍스트
    pub text: SmsText,
    /// 사용한 슬롯 수 (GSM 은 escape 포함, UCS-2 는 code unit 수)
    pub char_count: usize,
    /// 인코딩된 바이트 수
    pub byte_count: usize,
}

impl Segment {
    pub fn new(text: SmsText, char_count: usize, byte_count: usize) -> Self {
        Self {
            text,
            char_count,
            byte_count,
        }
    }

    pub fn empty() -> Self {
        Self::new(SmsText::new(), 0, 0)
    }
}

/// 분할 결과
///
/// `parts` 는 비어 있지 않습니다. 빈 텍스트는 빈 파트 하나가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub encoding: Encoding,
    pub parts: Vec<Segment>,
    pub bytes_per_segment: usize,
    pub chars_per_segment: usize,
}

impl SplitResult {
    pub fn new(
        encoding: Encoding,
        parts: Vec<Segment>,
        bytes_per_segment: usize,
        chars_per_segment: usize,
    ) -> Self {
        Self {
            encoding,
            parts,
            bytes_per_segment,
            chars_per_segment,
        }
    }

    /// 파트 수
    pub fn msg_count(&self) -> usize {
        self.parts.len()
    }

    /// 마지막 파트를 제외한 모든 파트를 꽉 찬 것으로 본 문자 수.
    ///
    /// 확장 문자나 surrogate pair 때문에 일찍 잘린 파트도 가득 찬 것으로
    /// 셉니다. 같은 텍스트에 대한 `CharCount::char_count` 와 일치합니다.
    pub fn padded_char_count(&self) -> usize {
        match self.parts.last() {
            Some(last) => (self.parts.len() - 1) * self.chars_per_segment + last.char_count,
            None => 0,
        }
    }

    /// 모든 파트 텍스트를 이어 붙인 결과
    pub fn joined_text(&self) -> SmsText {
        let mut units = Vec::with_capacity(self.parts.iter().map(|p| p.text.len()).sum());
        for part in &self.parts {
            units.extend_from_slice(part.text.as_units());
        }
        SmsText::from_units(units)
    }
}

// ============================================================================
// Char count
// ============================================================================

/// 한 인코딩 가정에서의 문자/메시지 수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharCount {
    /// 사용 슬롯 수 (연결 메시지에서는 닫힌 세그먼트를 가득 찬 것으로 계산)
    pub char_count: usize,
    /// 필요한 메시지 파트 수
    pub msg_count: usize,
    /// 파트당 슬롯 수 (단일 메시지면 160 / 70)
    pub chars_per_segment: usize,
}

impl CharCount {
    /// 현재 파트에 남은 슬롯 수 ("남은 글자 수" 표시용)
    pub fn remaining_in_segment(&self) -> usize {
        self.msg_count
            .saturating_mul(self.chars_per_segment)
            .saturating_sub(self.char_count)
    }
}

/// GSM / UCS-2 두 가정의 계산 결과
///
/// 선택되지 않은 쪽도 항상 채워집니다. GSM 쪽은 비 GSM 문자가 1 슬롯짜리
/// 대체 문자로 바뀐다고 가정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharCountInfo {
    pub is_gsm_encoding: bool,
    pub gsm_char_count: CharCount,
    pub ucs2_char_count: CharCount,
}

impl CharCountInfo {
    /// 실제 사용될 인코딩
    pub fn encoding(&self) -> Encoding {
        if self.is_gsm_encoding {
            Encoding::Gsm
        } else {
            Encoding::Ucs2
        }
    }

    /// 선택된 인코딩 쪽 결과
    pub fn selected(&self) -> SelectedCharCount {
        let count = match self.encoding() {
            Encoding::Gsm => self.gsm_char_count,
            Encoding::Ucs2 => self.ucs2_char_count,
        };
        SelectedCharCount::new(count, self.encoding())
    }
}

/// 선택된 인코딩으로 태그된 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCharCount {
    pub char_count: usize,
    pub msg_count: usize,
    pub chars_per_segment: usize,
    pub encoding: Encoding,
}

impl SelectedCharCount {
    pub fn new(count: CharCount, encoding: Encoding) -> Self {
        Self {
            char_count: count.char_count,
            msg_count: count.msg_count,
            chars_per_segment: count.chars_per_segment,
            encoding,
        }
    }

    /// 인코딩 태그를 뗀 카운트
    pub fn count(&self) -> CharCount {
        CharCount {
            char_count: self.char_count,
            msg_count: self.msg_count,
            chars_per_segment: self.chars_per_segment,
        }
    }

    /// 현재 파트에 남은 슬롯 수
    pub fn remaining_in_segment(&self) -> usize {
        self.count().remaining_in_segment()
    }
}

// ============================================================================
// Char slot listing
// ============================================================================

/// 문자 하나(또는 surrogate pair 하나)와 그 슬롯 수
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSlot {
    pub text: SmsText,
    pub slots: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(text: &str, char_count: usize) -> Segment {
        Segment::new(SmsText::from(text), char_count, char_count)
    }

    #[test]
    fn test_padded_char_count() {
        let result = SplitResult::new(
            Encoding::Gsm,
            vec![part("a", 152), part("b", 153), part("c", 2)],
            134,
            153,
        );
        assert_eq!(result.msg_count(), 3);
        assert_eq!(result.padded_char_count(), 308);
    }

    #[test]
    fn test_joined_text() {
        let result = SplitResult::new(
            Encoding::Ucs2,
            vec![part("ab", 2), part("cd", 2)],
            4,
            2,
        );
        assert_eq!(result.joined_text(), "abcd");
    }

    #[test]
    fn test_selected_branch() {
        let info = CharCountInfo {
            is_gsm_encoding: false,
            gsm_char_count: CharCount {
                char_count: 3,
                msg_count: 1,
                chars_per_segment: 160,
            },
            ucs2_char_count: CharCount {
                char_count: 4,
                msg_count: 1,
                chars_per_segment: 70,
            },
        };
        let selected = info.selected();
        assert_eq!(selected.encoding, Encoding::Ucs2);
        assert_eq!(selected.char_count, 4);
        assert_eq!(selected.chars_per_segment, 70);
    }

    #[test]
    fn test_remaining_in_segment() {
        let count = CharCount {
            char_count: 162,
            msg_count: 2,
            chars_per_segment: 153,
        };
        assert_eq!(count.remaining_in_segment(), 144);

        let selected = SelectedCharCount::new(count, Encoding::Gsm);
        assert_eq!(selected.count(), count);
        assert_eq!(selected.remaining_in_segment(), 144);
    }

    #[test]
    fn test_split_result_json_shape() {
        let result = SplitResult::new(Encoding::Gsm, vec![part("asd", 3)], 140, 160);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["encoding"], "GSM");
        assert_eq!(json["bytesPerSegment"], 140);
        assert_eq!(json["charsPerSegment"], 160);
        assert_eq!(json["parts"][0]["text"], "asd");
        assert_eq!(json["parts"][0]["charCount"], 3);
        assert_eq!(json["parts"][0]["byteCount"], 3);
    }
}
