//! 공용 유틸리티 모듈
//!
//! - [`json_utils`] - DTO의 JSON 인코딩/디코딩
//! - [`string_utils`] - 민감 정보 마스킹

pub mod json_utils;
pub mod string_utils;

pub use json_utils::{JsonPayload, from_json};
pub use string_utils::{REDACTED, deserialize_null_default, redact_secret};
