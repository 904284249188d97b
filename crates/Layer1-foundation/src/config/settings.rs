//! SmsConfig - 통합 설정

use crate::capacity::CapacityModel;
use crate::Result;
use serde::{Deserialize, Serialize};

/// 기본 대체 문자
pub const DEFAULT_REPLACEMENT: &str = "?";

// ============================================================================
// SmsConfig
// ============================================================================

/// 최종 설정 (모든 레이어 병합 결과)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 세그먼트 용량
    #[serde(default)]
    pub capacity: CapacityModel,

    /// GSM 으로 표현할 수 없는 문자를 대신할 문자열
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

fn default_version() -> u32 {
    1
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_string()
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            capacity: CapacityModel::default(),
            replacement: default_replacement(),
        }
    }
}

impl SmsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: CapacityModel) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// 설정 파일 레이어 적용 (`Some` 인 값만 덮어씀)
    pub fn apply(&mut self, layer: SettingsFile) {
        if let Some(capacity) = layer.capacity {
            if let Some(sms_bytes) = capacity.sms_bytes {
                self.capacity.sms_bytes = sms_bytes;
            }
            if let Some(header) = capacity.concat_header_bytes {
                self.capacity.concat_header_bytes = header;
            }
        }
        if let Some(replacement) = layer.replacement {
            self.replacement = replacement;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.capacity.validate()
    }
}

// ============================================================================
// 설정 파일 레이어
// ============================================================================

/// 설정 파일 하나의 내용. 생략된 값은 이전 레이어 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacitySettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_bytes: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concat_header_bytes: Option<usize>,
}
