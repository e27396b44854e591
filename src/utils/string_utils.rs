//! 문자열 처리 유틸리티
//!
//! 민감한 값을 로그나 `Debug` 출력에 노출하지 않기 위한 헬퍼와
//! `null` 입력을 관대하게 받아들이는 serde deserializer를 제공합니다.

use serde::{Deserialize, Deserializer};

/// 마스킹된 값 표시 문자열
pub const REDACTED: &str = "***";

/// 비밀 값을 출력용 문자열로 대체합니다.
///
/// 값의 내용과 상관없이 항상 [`REDACTED`]를 반환하므로
/// 비밀 값이 비어 있는지 여부도 드러나지 않습니다.
pub fn redact_secret(_secret: &str) -> &'static str {
    REDACTED
}

/// `null`을 기본값으로 바꾸는 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_null_default")]`와 함께 쓰면
/// 필드가 없거나 `null`인 경우 모두 빈 문자열, 빈 목록, `false`가 됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_null_default")]
///     department: String,
/// }
///
/// // JSON: {"department": null} → ""
/// // JSON: {}                   → ""
/// ```
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
