//! Segment Counter - 한 번의 순회로 GSM / UCS-2 세그먼트 수 계산
//!
//! 텍스트를 UTF-16 code unit 단위로 한 번 훑으면서 GSM 가정과 UCS-2 가정을
//! 동시에 누적합니다. 부분 문자열은 만들지 않습니다.
//!
//! 두 트랙은 같은 분류 결과(`CharUnit`)를 받지만 서로 독립적이고,
//! "순수 GSM 인가" 플래그만이 어느 쪽을 주 결과로 쓸지 결정합니다.

use smsseg_foundation::{fits, CapacityModel, CharCount, CharCountInfo, CharUnit, Encoding};
use tracing::debug;

// ============================================================================
// Track - 인코딩 하나의 누적기
// ============================================================================

/// 인코딩 가정 하나의 누적 상태
#[derive(Debug, Clone, Copy)]
struct Track {
    chars_per_segment: usize,
    single_segment_chars: usize,
    /// 현재 세그먼트에 남은 슬롯
    remaining: usize,
    /// 닫힌 세그먼트를 가득 찬 것으로 본 누적 슬롯
    char_count: usize,
    msg_count: usize,
    /// 실제로 소비한 슬롯 합계 (패딩 제외)
    total: usize,
}

impl Track {
    fn new(capacity: &CapacityModel, encoding: Encoding) -> Self {
        let chars_per_segment = capacity.chars_per_segment(encoding);
        Self {
            chars_per_segment,
            single_segment_chars: capacity.single_segment_chars(encoding),
            remaining: chars_per_segment,
            char_count: 0,
            msg_count: 1,
            total: 0,
        }
    }

    /// `slots` 슬롯짜리 단위 하나를 소비. 0 이면 아무 일도 하지 않음.
    #[inline]
    fn consume(&mut self, slots: usize) {
        if slots == 0 {
            return;
        }

        self.total += slots;

        // 들어가지 않으면 현재 세그먼트를 닫는다. 남은 패딩은 따로 추적하지
        // 않고 닫힌 세그먼트를 가득 찬 것으로 계산한다.
        if !fits(self.remaining, slots) {
            self.char_count = self.msg_count.saturating_mul(self.chars_per_segment);
            self.msg_count += 1;
            self.remaining = self.chars_per_segment;
        }

        self.remaining = self.remaining.saturating_sub(slots);
        self.char_count += slots;
    }

    fn finish(&self) -> CharCount {
        // 단일 메시지(160 / 70)에 들어가면 연결 메시지 계산을 버린다
        if self.total <= self.single_segment_chars {
            return CharCount {
                char_count: self.total,
                msg_count: 1,
                chars_per_segment: self.single_segment_chars,
            };
        }

        CharCount {
            char_count: self.char_count,
            msg_count: self.msg_count,
            chars_per_segment: self.chars_per_segment,
        }
    }
}

// ============================================================================
// SegmentCounter
// ============================================================================

/// 세그먼트 카운터
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentCounter {
    capacity: CapacityModel,
}

impl SegmentCounter {
    pub fn new(capacity: CapacityModel) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> &CapacityModel {
        &self.capacity
    }

    /// UTF-16 code unit 열에 대한 두 트랙 결과
    pub fn count(&self, units: &[u16]) -> CharCountInfo {
        let mut gsm = Track::new(&self.capacity, Encoding::Gsm);
        let mut ucs2 = Track::new(&self.capacity, Encoding::Ucs2);
        let mut is_gsm_encoding = true;

        for unit in CharUnit::iter(units) {
            // 한 번이라도 GSM 이 아니면 텍스트 전체가 UCS-2
            if !unit.kind.is_gsm() {
                is_gsm_encoding = false;
            }
            gsm.consume(unit.gsm_slots);
            ucs2.consume(unit.ucs2_slots);
        }

        let info = CharCountInfo {
            is_gsm_encoding,
            gsm_char_count: gsm.finish(),
            ucs2_char_count: ucs2.finish(),
        };

        debug!(
            units = units.len(),
            encoding = %info.encoding(),
            gsm_msgs = info.gsm_char_count.msg_count,
            ucs2_msgs = info.ucs2_char_count.msg_count,
            "Counted segments"
        );

        info
    }
}
