//! 클라이언트(애플리케이션) 등록 요청 DTO

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::redact_secret;

/// OAuth 클라이언트 등록 요청
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistrationRequest {
    /// 클라이언트 식별자 (역직렬화 시 필수)
    pub client_id: String,

    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub client_name: String,

    /// 클라이언트 시크릿 (출력에서 제외)
    #[serde(default, skip_serializing, deserialize_with = "crate::utils::deserialize_null_default")]
    pub client_secret: String,

    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub redirect_uris: Vec<String>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_null_default")]
    pub scopes: Vec<String>,
}

impl ClientRegistrationRequest {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for ClientRegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRegistrationRequest")
            .field("client_id", &self.client_id)
            .field("client_name", &self.client_name)
            .field("client_secret", &redact_secret(&self.client_secret))
            .field("redirect_uris", &self.redirect_uris)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_secret_not_serialized() {
        let request = ClientRegistrationRequest {
            client_name: "Partner Portal".to_string(),
            redirect_uris: vec!["https://portal.example.com/callback".to_string()],
            scopes: vec!["openid".to_string(), "profile".to_string()],
            ..ClientRegistrationRequest::new("portal", "top-secret")
        };

        let json = serde_json::to_string(&request).unwrap();

        assert!(!json.contains("clientSecret"));
        assert!(!json.contains("top-secret"));
        assert!(json.contains(r#""clientId":"portal""#));
        assert!(json.contains(r#""redirectUris":["https://portal.example.com/callback"]"#));
    }

    #[test]
    fn test_client_secret_accepted_on_input() {
        let request: ClientRegistrationRequest = serde_json::from_value(json!({
            "clientId": "portal",
            "clientSecret": "top-secret"
        }))
        .unwrap();

        assert_eq!(request, ClientRegistrationRequest::new("portal", "top-secret"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", ClientRegistrationRequest::new("portal", "top-secret"));

        assert!(debug.contains("portal"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_null_optional_fields_decode_as_defaults() {
        let request: ClientRegistrationRequest = serde_json::from_value(json!({
            "clientId": "portal",
            "clientName": null,
            "clientSecret": null,
            "redirectUris": null,
            "scopes": null
        }))
        .unwrap();

        assert_eq!(request, ClientRegistrationRequest::new("portal", ""));
    }
}
