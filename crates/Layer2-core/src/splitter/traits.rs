//! Splitter Traits - 인코딩별 세그먼트 분할 인터페이스

use smsseg_foundation::{CapacityModel, Encoding, SplitResult};

// ============================================================================
// SegmentSplitter
// ============================================================================

/// 고정된 인코딩 하나로 텍스트를 파트로 자르는 분할기
///
/// 구현체는 상태가 없으므로 `&'static` 으로 공유합니다.
pub trait SegmentSplitter: Send + Sync {
    /// 담당 인코딩
    fn encoding(&self) -> Encoding;

    /// 이보다 작은 파트 예산은 이 값으로 올려서 사용
    fn min_segment_bytes(&self) -> usize;

    /// 텍스트 전체를 이 인코딩으로 담았을 때의 바이트 수
    fn byte_length(&self, units: &[u16]) -> usize;

    /// 파트당 `bytes_per_segment` 바이트로 자르기.
    ///
    /// 결과의 `parts` 는 항상 하나 이상입니다.
    fn split(&self, units: &[u16], bytes_per_segment: usize) -> SplitResult;

    /// 자르지 않고 단일 메시지 하나로 만들기
    fn single(&self, units: &[u16], capacity: &CapacityModel) -> SplitResult;

    /// 단일 메시지(연결 헤더 없음)에 들어가는지
    fn fits_single(&self, units: &[u16], capacity: &CapacityModel) -> bool {
        self.byte_length(units) <= capacity.single_segment_bytes()
    }

    /// 단일 메시지에 들어가면 그대로, 아니면 연결 메시지 예산으로 분할
    fn split_for_sms(&self, units: &[u16], capacity: &CapacityModel) -> SplitResult {
        if self.fits_single(units, capacity) {
            self.single(units, capacity)
        } else {
            self.split(units, capacity.concat_payload_bytes())
        }
    }
}
