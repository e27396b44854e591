//! JSON 인코딩/디코딩 헬퍼
//!
//! 응답 DTO를 외부 표현으로 변환하는 공통 진입점입니다.
//! 출력 형식은 [`SerializationConfig`]를 따릅니다.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SerializationConfig;
use crate::errors::{AppError, AppResult};

/// `Serialize`를 구현한 모든 타입에 JSON 변환 메서드를 제공하는 확장 trait
pub trait JsonPayload: Serialize {
    /// 설정된 형식(들여쓰기/압축)으로 JSON 문자열을 생성합니다.
    fn to_json(&self) -> AppResult<String> {
        if SerializationConfig::pretty_json() {
            self.to_json_pretty()
        } else {
            self.to_json_compact()
        }
    }

    fn to_json_compact(&self) -> AppResult<String> {
        debug!("JSON 인코딩: {}", std::any::type_name::<Self>());
        serde_json::to_string(self).map_err(|e| AppError::SerializationError(e.to_string()))
    }

    fn to_json_pretty(&self) -> AppResult<String> {
        debug!("JSON 인코딩(pretty): {}", std::any::type_name::<Self>());
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::SerializationError(e.to_string()))
    }

    fn to_json_value(&self) -> AppResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| AppError::SerializationError(e.to_string()))
    }
}

impl<T: Serialize + ?Sized> JsonPayload for T {}

/// JSON 문자열에서 DTO를 복원합니다.
///
/// # Errors
///
/// * `AppError::DeserializationError` - 문법 오류, 타입 불일치, 입력 조기 종료
pub fn from_json<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|e| {
        debug!("JSON 디코딩 실패 ({}): {}", std::any::type_name::<T>(), e);
        AppError::from(e)
    })
}
