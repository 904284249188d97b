//! Configuration - 용량 모델과 대체 문자 설정
//!
//! - `settings`: `SmsConfig` 와 설정 파일 레이어 타입
//! - `loader`: 사용자 / 프로젝트 / 로컬 설정 파일 검색 및 병합

mod loader;
mod settings;

pub use loader::{load_settings_file, strip_json_comments, ConfigLoader, CONFIG_DIR_NAME};
pub use settings::{CapacitySettings, SettingsFile, SmsConfig, DEFAULT_REPLACEMENT};
