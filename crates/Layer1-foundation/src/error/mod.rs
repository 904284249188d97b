//! Error types for SmsSeg
//!
//! 세그먼트 계산 자체는 실패하지 않습니다. 에러는 설정 로드와 입력 처리
//! 경계에서만 발생하며, 여기서 중앙 관리합니다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// SmsSeg 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 입력 관련
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 사용자에게 그대로 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Config(_) | Error::InvalidInput(_))
    }

    /// 설정 에러 생성 헬퍼
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing() {
        assert!(Error::config("bad header").is_user_facing());
        assert!(Error::InvalidInput("empty".into()).is_user_facing());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_user_facing());
    }

    #[test]
    fn test_display() {
        let err = Error::config("header too large");
        assert_eq!(err.to_string(), "Configuration error: header too large");
    }
}
