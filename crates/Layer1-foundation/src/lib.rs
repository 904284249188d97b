//! # smsseg-foundation
//!
//! Foundation layer for SmsSeg:
//! - Gsm: GSM 03.38 기본/확장 알파벳 분류기
//! - Capacity: 세그먼트 용량 모델 (140 바이트, 6 바이트 UDH)
//! - Strings: UTF-16 텍스트 타입과 surrogate 헬퍼
//! - Types: 분할/카운트 결과 타입
//! - Config: 설정 파일 로드 및 병합
//!
//! ## 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  smsseg-core (counter, splitter, normalizer)  │
//! │                     │                         │
//! │                     ▼                         │
//! │   CharUnit ── classify_unit ── GSM tables     │
//! │      │                                        │
//! │      ▼                                        │
//! │   CapacityModel ── fits(remaining, cost)      │
//! └───────────────────────────────────────────────┘
//! ```

pub mod capacity;
pub mod config;
pub mod error;
pub mod gsm;
pub mod strings;
pub mod types;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Capacity (용량 모델)
// ============================================================================
pub use capacity::{
    fits, gsm_bytes_for_chars, gsm_chars_for_bytes, ucs2_chars_for_bytes, CapacityModel,
    Encoding, GSM_CHARS_PER_SEGMENT, GSM_CHARS_SINGLE_SEGMENT, SMS_BYTES, SMS_CONCAT_UDH_BYTES,
    SMS_CONCAT_UD_BYTES, UCS2_CHARS_PER_SEGMENT, UCS2_CHARS_SINGLE_SEGMENT,
};

// ============================================================================
// Gsm (알파벳 분류)
// ============================================================================
pub use gsm::{
    classify, classify_unit, is_extended_gsm, is_gsm_char, is_standard_gsm, CharUnit,
    GsmCharKind, GSM_ALPHABET, GSM_ALPHABET_EXTENDED,
};

// ============================================================================
// Strings (UTF-16 텍스트)
// ============================================================================
pub use strings::{
    is_high_surrogate, is_low_surrogate, is_pair_tail_at, is_surrogate_pair_at, SmsText,
};

// ============================================================================
// Types (결과 타입)
// ============================================================================
pub use types::{CharCount, CharCountInfo, CharSlot, Segment, SelectedCharCount, SplitResult};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    CapacitySettings, ConfigLoader, SettingsFile, SmsConfig, CONFIG_DIR_NAME, DEFAULT_REPLACEMENT,
};
