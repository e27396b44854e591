use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::utils::redact_secret;

/// 사용자 응답 DTO
///
/// 메모리에는 비밀번호를 보관하지만 직렬화는 항상 [`UserResponseView`]를 거치므로
/// 출력에 비밀번호가 포함될 수 없습니다. 역직렬화 시 입력의 `password`는 무시되며,
/// 없거나 `null`인 필드는 기본값이 됩니다.
///
/// 동등성 비교에는 비밀번호도 포함됩니다.
#[derive(Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserResponseBody {
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    id: String,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    username: String,
    #[serde(skip_deserializing)]
    password: String,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    roles: Vec<String>,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    active: bool,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    department: String,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    region: String,
}

/// 비밀번호 필드가 없는 출력 전용 투영
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseView<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub roles: &'a [String],
    pub active: bool,
    pub department: &'a str,
    pub region: &'a str,
}

impl UserResponseBody {
    pub fn builder() -> UserResponseBodyBuilder {
        UserResponseBodyBuilder::default()
    }

    /// 외부로 내보낼 수 있는 필드만 빌려 옵니다.
    pub fn view(&self) -> UserResponseView<'_> {
        UserResponseView {
            id: &self.id,
            username: &self.username,
            roles: &self.roles,
            active: self.active,
            department: &self.department,
            region: &self.region,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Serialize for UserResponseBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.view().serialize(serializer)
    }
}

impl fmt::Debug for UserResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserResponseBody")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &redact_secret(&self.password))
            .field("roles", &self.roles)
            .field("active", &self.active)
            .field("department", &self.department)
            .field("region", &self.region)
            .finish()
    }
}

/// [`UserResponseBody`] 빌더
///
/// 지정하지 않은 필드는 빈 문자열, 빈 목록, `false`가 됩니다.
#[derive(Default)]
pub struct UserResponseBodyBuilder {
    inner: UserResponseBody,
}

impl UserResponseBodyBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.inner.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = password.into();
        self
    }

    pub fn roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.inner.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.inner.active = active;
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.inner.department = department.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.inner.region = region.into();
        self
    }

    pub fn build(self) -> UserResponseBody {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{JsonPayload, from_json};
    use serde_json::json;

    fn sample(password: &str) -> UserResponseBody {
        UserResponseBody::builder()
            .id("507f1f77bcf86cd799439011")
            .username("john_doe")
            .password(password)
            .roles(["ROLE_USER", "ROLE_ADMIN"])
            .active(true)
            .department("Platform")
            .region("APAC")
            .build()
    }

    #[test]
    fn test_password_never_serialized() {
        for password in ["", "hunter2", "password"] {
            let value = sample(password).to_json_value().unwrap();
            let object = value.as_object().unwrap();

            assert!(!object.contains_key("password"));
            assert_eq!(object.len(), 6);
        }

        let json = sample("hunter2").to_json_compact().unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample("hunter2")).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "507f1f77bcf86cd799439011",
                "username": "john_doe",
                "roles": ["ROLE_USER", "ROLE_ADMIN"],
                "active": true,
                "department": "Platform",
                "region": "APAC"
            })
        );
    }

    #[test]
    fn test_public_fields_survive_round_trip() {
        let original = sample("hunter2");

        let json = original.to_json_compact().unwrap();
        let decoded: UserResponseBody = from_json(&json).unwrap();

        assert_eq!(decoded.view(), original.view());
        assert_eq!(decoded.password(), "");
    }

    #[test]
    fn test_empty_fields_still_serialized() {
        let value = serde_json::to_value(UserResponseBody::builder().build()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "",
                "username": "",
                "roles": [],
                "active": false,
                "department": "",
                "region": ""
            })
        );
    }

    #[test]
    fn test_empty_roles_serialize_as_empty_array() {
        let body = UserResponseBody::builder()
            .username("ghost")
            .roles(Vec::<String>::new())
            .build();

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["roles"], json!([]));
    }

    #[test]
    fn test_equality_includes_password() {
        assert_eq!(sample("hunter2"), sample("hunter2"));
        assert_ne!(sample("hunter2"), sample("other"));

        // 출력은 같아도 값은 다름
        assert_eq!(
            serde_json::to_value(sample("hunter2")).unwrap(),
            serde_json::to_value(sample("other")).unwrap()
        );
    }

    #[test]
    fn test_password_in_input_is_ignored() {
        let decoded: UserResponseBody = serde_json::from_value(json!({
            "id": "1",
            "username": "jane",
            "password": "leaked",
            "active": true
        }))
        .unwrap();

        assert_eq!(decoded.password(), "");
        assert_eq!(decoded.username(), "jane");
        assert!(decoded.active());
        assert!(decoded.roles().is_empty());
        assert_eq!(decoded.region(), "");
    }

    #[test]
    fn test_accessors() {
        let body = sample("hunter2");

        assert_eq!(body.id(), "507f1f77bcf86cd799439011");
        assert_eq!(body.password(), "hunter2");
        assert_eq!(body.roles(), ["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()]);
        assert_eq!(body.department(), "Platform");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", sample("hunter2"));

        assert!(debug.contains("john_doe"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let raw = r#"{"id":"42","username":null,"roles":null,"active":null,"department":null,"region":null}"#;

        let decoded: UserResponseBody = from_json(raw).unwrap();

        assert_eq!(decoded.id(), "42");
        assert_eq!(decoded.username(), "");
        assert!(decoded.roles().is_empty());
        assert!(!decoded.active());
        assert_eq!(decoded.department(), "");
        assert_eq!(decoded.region(), "");
    }

    #[test]
    fn test_missing_fields_decode_as_defaults() {
        let decoded: UserResponseBody = from_json(r#"{"username":"jane"}"#).unwrap();

        assert_eq!(decoded, UserResponseBody::builder().username("jane").build());
    }
}
