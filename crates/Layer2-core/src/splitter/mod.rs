//! Segment Splitter - 텍스트를 실제 SMS 파트로 자르기
//!
//! ## 구조
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  splitter_for(encoding)                      │
//! │    ├── GsmSplitter  (7-bit, escape 쌍 보존)  │
//! │    └── Ucs2Splitter (16-bit, surrogate 보존) │
//! ├──────────────────────────────────────────────┤
//! │  SegmentSplitter                             │
//! │    ├── split(units, bytes) - 고정 예산 분할  │
//! │    ├── single(units, cap)  - 단일 메시지     │
//! │    └── split_for_sms(units, cap)             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 두 분할기 모두 다음 단위가 남은 예산에 들어가지 않으면 (`fits`) 현재
//! 파트를 먼저 닫습니다. 카운터와 같은 판정을 쓰므로 파트 수가 항상 같습니다.

mod gsm;
mod traits;
mod ucs2;

pub use gsm::GsmSplitter;
pub use traits::SegmentSplitter;
pub use ucs2::Ucs2Splitter;

use smsseg_foundation::Encoding;

/// 인코딩에 맞는 분할기
pub fn splitter_for(encoding: Encoding) -> &'static dyn SegmentSplitter {
    match encoding {
        Encoding::Gsm => &GsmSplitter,
        Encoding::Ucs2 => &Ucs2Splitter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitter_for() {
        assert_eq!(splitter_for(Encoding::Gsm).encoding(), Encoding::Gsm);
        assert_eq!(splitter_for(Encoding::Ucs2).encoding(), Encoding::Ucs2);
        assert_eq!(splitter_for(Encoding::Gsm).min_segment_bytes(), 2);
        assert_eq!(splitter_for(Encoding::Ucs2).min_segment_bytes(), 4);
    }
}
