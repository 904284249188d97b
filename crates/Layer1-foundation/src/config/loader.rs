//! Configuration Loader
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.smsseg/settings.json`
//! 2. Project-level: `.smsseg/settings.json`
//! 3. Local (gitignored): `.smsseg/settings.local.json`
//!
//! 각 레벨의 설정이 이전 레벨을 오버라이드합니다.

use super::settings::{SettingsFile, SmsConfig};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".smsseg";

// ============================================================================
// ConfigLoader - 설정 로더
// ============================================================================

/// 설정 로더
pub struct ConfigLoader {
    /// 검색 경로 (우선순위 낮은 것부터)
    search_paths: Vec<ConfigPath>,
}

/// 설정 파일 경로 정보
#[derive(Debug, Clone)]
struct ConfigPath {
    path: PathBuf,
    /// 높을수록 우선
    priority: u8,
    description: &'static str,
}

impl ConfigLoader {
    /// 기본 검색 경로로 생성
    pub fn new(working_dir: &Path) -> Self {
        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(ConfigPath {
                path: home.join(CONFIG_DIR_NAME).join("settings.json"),
                priority: 10,
                description: "User settings",
            });
        }

        paths.push(ConfigPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.json"),
            priority: 20,
            description: "Project settings",
        });

        paths.push(ConfigPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.local.json"),
            priority: 30,
            description: "Local settings",
        });

        paths.sort_by_key(|p| p.priority);

        Self {
            search_paths: paths,
        }
    }

    /// 커스텀 검색 경로로 생성 (뒤에 올수록 우선)
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let search_paths = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| ConfigPath {
                path,
                priority: u8::try_from(i).unwrap_or(u8::MAX),
                description: "Custom",
            })
            .collect();

        Self { search_paths }
    }

    /// 모든 경로의 설정을 병합.
    ///
    /// 파싱에 실패한 파일은 경고 후 건너뜁니다. 병합 결과가 유효하지 않으면 에러.
    pub fn load_all(&self) -> Result<SmsConfig> {
        let mut config = SmsConfig::new();

        for config_path in &self.search_paths {
            if !config_path.path.exists() {
                continue;
            }
            match load_settings_file(&config_path.path) {
                Ok(layer) => {
                    info!(
                        "Loaded {} from: {}",
                        config_path.description,
                        config_path.path.display()
                    );
                    config.apply(layer);
                }
                Err(e) => {
                    warn!(
                        "Failed to load settings from {}: {}",
                        config_path.path.display(),
                        e
                    );
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// 지정한 파일만 로드 (파일이 없거나 잘못되면 에러)
    pub fn load_from(path: &Path) -> Result<SmsConfig> {
        let mut config = SmsConfig::new();
        config.apply(load_settings_file(path)?);
        config.validate()?;
        Ok(config)
    }

    /// 존재하는 설정 파일 목록
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter(|p| p.path.exists())
            .map(|p| p.path.clone())
            .collect()
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 파일 하나를 설정 레이어로 읽기
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)?;
    let content = strip_json_comments(&content);

    let layer: SettingsFile = serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Invalid settings at {}: {}", path.display(), e))
    })?;

    debug!(
        "Parsed settings {}: capacity={:?}, replacement={:?}",
        path.display(),
        layer.capacity,
        layer.replacement
    );

    Ok(layer)
}

/// JSON 주석 제거 (`//` 및 `/* */`). 문자열 안의 내용은 그대로 둡니다.
pub fn strip_json_comments(input: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Str,
        StrEscape,
        Line,
        Block,
    }

    let mut output = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        state = match (state, c) {
            (State::Code, '"') => {
                output.push(c);
                State::Str
            }
            (State::Code, '/') if chars.peek() == Some(&'/') => {
                chars.next();
                State::Line
            }
            (State::Code, '/') if chars.peek() == Some(&'*') => {
                chars.next();
                State::Block
            }
            (State::Code, _) => {
                output.push(c);
                State::Code
            }
            (State::Str, '\\') => {
                output.push(c);
                State::StrEscape
            }
            (State::Str, '"') => {
                output.push(c);
                State::Code
            }
            (State::Str, _) | (State::StrEscape, _) => {
                output.push(c);
                State::Str
            }
            (State::Line, '\n') => {
                output.push(c);
                State::Code
            }
            (State::Line, _) => State::Line,
            (State::Block, '*') if chars.peek() == Some(&'/') => {
                chars.next();
                State::Code
            }
            (State::Block, _) => State::Block,
        };
    }

    output
}

// ============================================================================
// 테스트
// ============================================================================
