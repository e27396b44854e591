//! 등록 대상 엔티티 추상화
//!
//! 등록 응답이 담을 수 있는 엔티티(사용자, 클라이언트)를 하나의 타입으로 묶습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::request::{ClientRegistrationRequest, UserRegistrationRequest};

/// 사용자 등록을 나타내는 엔티티 타입 문자열
pub const ENTITY_TYPE_USER: &str = "USER";
/// 클라이언트 등록을 나타내는 엔티티 타입 문자열
pub const ENTITY_TYPE_CLIENT: &str = "CLIENT";

/// 등록 가능한 엔티티의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Client,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => ENTITY_TYPE_USER,
            EntityKind::Client => ENTITY_TYPE_CLIENT,
        }
    }

    /// 엔티티 타입 문자열을 해석합니다. 대소문자를 구분합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ENTITY_TYPE_USER => Some(EntityKind::User),
            ENTITY_TYPE_CLIENT => Some(EntityKind::Client),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 등록 요청으로 접수될 수 있는 엔티티가 구현하는 trait
pub trait RegistrationEntity {
    fn entity_kind(&self) -> EntityKind;
}

impl RegistrationEntity for UserRegistrationRequest {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::User
    }
}

impl RegistrationEntity for ClientRegistrationRequest {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::Client
    }
}

/// 등록 응답이 소유하는 엔티티
///
/// 타입 태그 없이 내부 변형의 필드만 직렬화됩니다. 역직렬화 시에는
/// `username` 필드가 있으면 사용자, `clientId` 필드가 있으면 클라이언트로 해석합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegisteredEntity {
    User(UserRegistrationRequest),
    Client(ClientRegistrationRequest),
}

impl Default for RegisteredEntity {
    fn default() -> Self {
        RegisteredEntity::User(UserRegistrationRequest::default())
    }
}

impl RegistrationEntity for RegisteredEntity {
    fn entity_kind(&self) -> EntityKind {
        match self {
            RegisteredEntity::User(user) => user.entity_kind(),
            RegisteredEntity::Client(client) => client.entity_kind(),
        }
    }
}

impl From<UserRegistrationRequest> for RegisteredEntity {
    fn from(user: UserRegistrationRequest) -> Self {
        RegisteredEntity::User(user)
    }
}

impl From<ClientRegistrationRequest> for RegisteredEntity {
    fn from(client: ClientRegistrationRequest) -> Self {
        RegisteredEntity::Client(client)
    }
}
