//! # 등록 관련 DTO 모듈
//!
//! - [`entity`] - 등록 엔티티 추상화 (`RegistrationEntity`, `RegisteredEntity`)
//! - [`request`] - 사용자/클라이언트 등록 요청
//! - [`response`] - 등록 완료 응답

pub mod entity;
pub mod request;
pub mod response;

pub use entity::{
    ENTITY_TYPE_CLIENT, ENTITY_TYPE_USER, EntityKind, RegisteredEntity, RegistrationEntity,
};
pub use request::{ClientRegistrationRequest, UserRegistrationRequest};
pub use response::{RegistrationResponse, RegistrationResponseBuilder};
