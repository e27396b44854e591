use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::dto::registration::entity::{EntityKind, RegisteredEntity, RegistrationEntity};

/// 등록 완료 응답 DTO
///
/// 등록된 엔티티와 그 종류를 나타내는 문자열을 담습니다.
/// `entity_type`은 자유 형식 문자열이며 엔티티 변형과의 일치 여부를 강제하지 않습니다.
/// 역직렬화 시 없거나 `null`인 필드는 빌더와 같은 기본값을 씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationResponse {
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    registered_entity: RegisteredEntity,
    #[serde(deserialize_with = "crate::utils::deserialize_null_default")]
    entity_type: String,
}

impl RegistrationResponse {
    pub fn builder() -> RegistrationResponseBuilder {
        RegistrationResponseBuilder::default()
    }

    /// 엔티티 변형에서 `entity_type`을 유도하여 응답을 생성합니다.
    pub fn for_entity(entity: impl Into<RegisteredEntity>) -> Self {
        let registered_entity = entity.into();
        let entity_type = registered_entity.entity_kind().as_str().to_string();

        Self::builder()
            .registered_entity(registered_entity)
            .entity_type(entity_type)
            .build()
    }

    pub fn registered_entity(&self) -> &RegisteredEntity {
        &self.registered_entity
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// `entity_type` 문자열을 해석합니다. 알 수 없는 값이면 `None`입니다.
    pub fn entity_kind(&self) -> Option<EntityKind> {
        EntityKind::parse(&self.entity_type)
    }

    /// `entity_type`이 실제 엔티티 변형을 가리키는지 여부
    ///
    /// 정보 제공용이며 생성 시 거부 조건으로 쓰이지 않습니다.
    pub fn is_consistent(&self) -> bool {
        self.entity_kind() == Some(self.registered_entity.entity_kind())
    }
}

/// [`RegistrationResponse`] 빌더
///
/// 지정하지 않은 엔티티는 빈 사용자 등록, 엔티티 타입은 빈 문자열이 됩니다.
#[derive(Debug, Default)]
pub struct RegistrationResponseBuilder {
    registered_entity: Option<RegisteredEntity>,
    entity_type: Option<String>,
}

impl RegistrationResponseBuilder {
    pub fn registered_entity(mut self, entity: impl Into<RegisteredEntity>) -> Self {
        self.registered_entity = Some(entity.into());
        self
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn build(self) -> RegistrationResponse {
        let response = RegistrationResponse {
            registered_entity: self.registered_entity.unwrap_or_default(),
            entity_type: self.entity_type.unwrap_or_default(),
        };

        if response.is_consistent() {
            debug!("등록 응답 생성: entityType={}", response.entity_type);
        } else {
            warn!(
                "⚠️ entityType '{}'이(가) 등록 엔티티 종류 {}와 일치하지 않습니다",
                response.entity_type,
                response.registered_entity.entity_kind()
            );
        }

        response
    }
}
