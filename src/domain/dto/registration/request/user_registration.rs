//! 사용자 등록 요청 DTO
//!
//! 새 사용자 계정 등록 시 접수되는 데이터 구조입니다.
//! 비밀번호는 입력으로만 받고 어떤 직렬화 출력에도 포함되지 않습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::redact_secret;

/// 사용자 등록 요청
///
/// 형식 검증은 이 타입의 책임이 아닙니다. 값은 받은 그대로 보관됩니다.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationRequest {
    /// 로그인/표시용 사용자명 (역직렬화 시 필수)
    pub username: String,

    /// 평문 비밀번호 (출력에서 제외)
    #[serde(default, skip_serializing, deserialize_with = "crate::utils::deserialize_null_default")]
    pub password: String,

    /// 요청한 권한 목록
    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub roles: Vec<String>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub department: String,

    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub region: String,
}

impl UserRegistrationRequest {
    /// 사용자명과 비밀번호만으로 요청을 생성합니다. 나머지는 빈 값입니다.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for UserRegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistrationRequest")
            .field("username", &self.username)
            .field("password", &redact_secret(&self.password))
            .field("roles", &self.roles)
            .field("department", &self.department)
            .field("region", &self.region)
            .finish()
    }
}
