//! # Data Transfer Objects (DTO) 모듈
//!
//! API 경계를 넘나드는 데이터 구조를 정의합니다. 이 모듈의 타입들은 동작 없이
//! 값만 운반하며, 생성 후에는 변경되지 않습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! dto/
//! ├── registration/
//! │   ├── entity      ← RegistrationEntity, RegisteredEntity
//! │   ├── request/    ← UserRegistrationRequest, ClientRegistrationRequest
//! │   └── response/   ← RegistrationResponse
//! └── users/
//!     └── response/   ← UserResponseBody, UserResponseView
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use sentinel_dto::domain::dto::registration::{RegistrationResponse, UserRegistrationRequest};
//! use sentinel_dto::utils::JsonPayload;
//!
//! let response = RegistrationResponse::for_entity(UserRegistrationRequest::new("john_doe", "pw"));
//! let body = response.to_json()?;
//! ```
//!
//! ## 직렬화 규칙
//!
//! - 필드명은 camelCase (`registeredEntity`, `entityType`, `clientId` ...)
//! - 비밀 값(`password`, `clientSecret`)은 어떤 출력에도 포함되지 않음
//! - 빈 문자열, 빈 목록도 생략하지 않고 그대로 출력

pub mod registration;
pub mod users;
