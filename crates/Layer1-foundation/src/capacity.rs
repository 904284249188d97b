//! Capacity Model - SMS 세그먼트 용량 정의
//!
//! 140 바이트 payload 와 6 바이트 연결(concatenation) 헤더에서 파생되는
//! 세그먼트 용량 표입니다.
//!
//! | 항목 | GSM | UCS-2 |
//! |------|-----|-------|
//! | 단일 메시지 | 160 | 70 |
//! | 연결 메시지 세그먼트 | 153 | 67 |

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// 단일 SMS payload 바이트
pub const SMS_BYTES: usize = 140;
/// 연결 메시지 UDH 바이트
pub const SMS_CONCAT_UDH_BYTES: usize = 6;
/// 연결 메시지에서 사용 가능한 payload 바이트
pub const SMS_CONCAT_UD_BYTES: usize = SMS_BYTES - SMS_CONCAT_UDH_BYTES;

pub const GSM_CHARS_PER_SEGMENT: usize = gsm_chars_for_bytes(SMS_CONCAT_UD_BYTES);
pub const GSM_CHARS_SINGLE_SEGMENT: usize = gsm_chars_for_bytes(SMS_BYTES);
pub const UCS2_CHARS_PER_SEGMENT: usize = ucs2_chars_for_bytes(SMS_CONCAT_UD_BYTES);
pub const UCS2_CHARS_SINGLE_SEGMENT: usize = ucs2_chars_for_bytes(SMS_BYTES);

/// 연결 헤더를 뺀 뒤 최소한 남아야 하는 payload (surrogate pair 하나)
pub const MIN_CONCAT_PAYLOAD_BYTES: usize = 4;
/// 설정 파일에서 허용하는 단일 메시지 payload 상한
pub const MAX_SMS_BYTES: usize = u16::MAX as usize;

// ============================================================================
// 변환 함수
// ============================================================================

/// `bytes` 바이트에 들어가는 7-bit 문자 슬롯 수 (내림)
#[inline]
pub const fn gsm_chars_for_bytes(bytes: usize) -> usize {
    bytes.saturating_mul(8) / 7
}

/// 7-bit 문자 슬롯 `chars` 개를 담는 데 필요한 바이트 (올림)
///
/// 확장 문자의 escape 슬롯도 `chars` 에 포함되어 있어야 합니다.
#[inline]
pub const fn gsm_bytes_for_chars(chars: usize) -> usize {
    chars.saturating_mul(7).div_ceil(8)
}

/// `bytes` 바이트에 들어가는 UCS-2 code unit 수 (내림)
#[inline]
pub const fn ucs2_chars_for_bytes(bytes: usize) -> usize {
    bytes / 2
}

/// 남은 용량에 `cost` 슬롯짜리 단위를 넣을 수 있는지.
///
/// 카운터와 splitter 가 같은 판단을 내리도록 세그먼트 경계는 항상 이
/// 함수로만 결정합니다.
#[inline]
pub const fn fits(remaining: usize, cost: usize) -> bool {
    cost <= remaining
}

// ============================================================================
// Encoding
// ============================================================================

/// 메시지 인코딩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Encoding {
    /// GSM 03.38 7-bit 기본 알파벳 (+ 확장 테이블)
    Gsm,
    /// UCS-2 (UTF-16 code unit 당 2 바이트)
    Ucs2,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gsm => "GSM",
            Self::Ucs2 => "UCS2",
        }
    }

    /// 이 인코딩에서 `bytes` 바이트에 들어가는 슬롯 수
    pub fn chars_for_bytes(&self, bytes: usize) -> usize {
        match self {
            Self::Gsm => gsm_chars_for_bytes(bytes),
            Self::Ucs2 => ucs2_chars_for_bytes(bytes),
        }
    }

    /// 이 인코딩에서 `chars` 슬롯이 차지하는 바이트 수
    pub fn bytes_for_chars(&self, chars: usize) -> usize {
        match self {
            Self::Gsm => gsm_bytes_for_chars(chars),
            Self::Ucs2 => chars.saturating_mul(2),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CapacityModel
// ============================================================================

/// 세그먼트 용량 모델
///
/// 기본값은 140 바이트 payload, 6 바이트 연결 헤더(8-bit 참조 번호 UDH).
/// 16-bit 참조 번호를 쓰는 게이트웨이라면 헤더를 7 바이트로 설정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityModel {
    /// 단일 메시지 payload 바이트
    #[serde(default = "default_sms_bytes")]
    pub sms_bytes: usize,
    /// 연결 메시지 헤더 바이트
    #[serde(default = "default_concat_header_bytes")]
    pub concat_header_bytes: usize,
}

fn default_sms_bytes() -> usize {
    SMS_BYTES
}

fn default_concat_header_bytes() -> usize {
    SMS_CONCAT_UDH_BYTES
}

impl Default for CapacityModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl CapacityModel {
    /// 140 / 6 표준 모델
    pub const STANDARD: CapacityModel = CapacityModel {
        sms_bytes: SMS_BYTES,
        concat_header_bytes: SMS_CONCAT_UDH_BYTES,
    };

    pub fn new(sms_bytes: usize, concat_header_bytes: usize) -> Self {
        Self {
            sms_bytes,
            concat_header_bytes,
        }
    }

    /// 연결 메시지 세그먼트당 payload 바이트 (최소 4 바이트)
    ///
    /// 카운터와 분할기는 모두 이 값을 읽으므로 경계 판단이 같습니다.
    pub fn concat_payload_bytes(&self) -> usize {
        self.sms_bytes
            .saturating_sub(self.concat_header_bytes)
            .max(MIN_CONCAT_PAYLOAD_BYTES)
    }

    /// 단일 메시지 바이트 (모든 인코딩 공통)
    pub fn single_segment_bytes(&self) -> usize {
        self.sms_bytes
    }

    /// 단일 메시지에 들어가는 슬롯 수 (160 / 70)
    pub fn single_segment_chars(&self, encoding: Encoding) -> usize {
        encoding.chars_for_bytes(self.sms_bytes)
    }

    /// 연결 메시지 세그먼트당 슬롯 수 (153 / 67)
    pub fn chars_per_segment(&self, encoding: Encoding) -> usize {
        encoding.chars_for_bytes(self.concat_payload_bytes())
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.sms_bytes > MAX_SMS_BYTES {
            return Err(Error::Config(format!(
                "message payload of {} bytes exceeds the {}-byte limit",
                self.sms_bytes, MAX_SMS_BYTES
            )));
        }
        if self.sms_bytes.saturating_sub(self.concat_header_bytes) < MIN_CONCAT_PAYLOAD_BYTES {
            return Err(Error::Config(format!(
                "concatenation header of {} bytes leaves less than {} payload bytes in a {}-byte message",
                self.concat_header_bytes, MIN_CONCAT_PAYLOAD_BYTES, self.sms_bytes
            )));
        }
        Ok(())
    }
}
