//! 크레이트 전역에서 사용하는 에러 시스템
//!
//! 응답 DTO 자체는 실패하지 않습니다. 에러는 JSON 인코딩/디코딩과
//! 환경 설정 파싱 경계에서만 발생하며, 모두 `AppError`로 모입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use sentinel_dto::errors::AppResult;
//!
//! fn decode(raw: &str) -> AppResult<UserResponseBody> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//! ```

use serde_json::error::Category;
use thiserror::Error;

/// 크레이트 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 응답 페이로드를 외부 표현으로 변환하지 못함
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 외부 표현에서 DTO를 복원하지 못함
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// 환경 변수 값 해석 실패
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => AppError::SerializationError(err.to_string()),
            Category::Syntax | Category::Data | Category::Eof => {
                AppError::DeserializationError(err.to_string())
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_is_deserialization_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err = AppError::from(err);

        assert!(matches!(app_err, AppError::DeserializationError(_)));
    }

    #[test]
    fn test_data_error_is_deserialization_error() {
        let err = serde_json::from_str::<Vec<String>>(r#"{"a": 1}"#).unwrap_err();

        assert!(matches!(AppError::from(err), AppError::DeserializationError(_)));
    }

    #[test]
    fn test_error_display_prefix() {
        let error = AppError::ConfigError("JSON_PRETTY=maybe".to_string());

        assert_eq!(error.to_string(), "Configuration error: JSON_PRETTY=maybe");
    }

    #[test]
    fn test_question_mark_converts_serde_error() {
        fn decode(raw: &str) -> AppResult<Vec<String>> {
            Ok(serde_json::from_str(raw)?)
        }

        assert_eq!(decode(r#"["ROLE_USER"]"#).unwrap(), vec!["ROLE_USER".to_string()]);
        assert!(matches!(decode("[1]"), Err(AppError::DeserializationError(_))));
    }
}
