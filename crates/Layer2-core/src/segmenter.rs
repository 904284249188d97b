//! Segmenter - 인코딩 선택 + 단일/연결 메시지 선택 + 분할

use crate::selector::select_encoding;
use crate::splitter::splitter_for;
use smsseg_foundation::{CapacityModel, Encoding, SplitResult};
use tracing::debug;

/// 텍스트를 실제 SMS 파트로 나누는 진입점
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    capacity: CapacityModel,
}

impl Segmenter {
    pub fn new(capacity: CapacityModel) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> &CapacityModel {
        &self.capacity
    }

    /// 인코딩을 자동으로 골라 분할
    pub fn split(&self, units: &[u16]) -> SplitResult {
        self.split_as(units, select_encoding(units))
    }

    /// 지정한 인코딩으로 분할.
    ///
    /// 단일 메시지 바이트 수 안에 들어가면 자르지 않고 단일 메시지 용량을 씁니다.
    pub fn split_as(&self, units: &[u16], encoding: Encoding) -> SplitResult {
        let result = splitter_for(encoding).split_for_sms(units, &self.capacity);

        debug!(
            units = units.len(),
            encoding = %result.encoding,
            parts = result.msg_count(),
            chars_per_segment = result.chars_per_segment,
            "Split text into segments"
        );

        result
    }
}
