//! 센티넬 등록/사용자 응답 계약
//!
//! 신원 서비스가 API 응답으로 내보내는 데이터 구조를 정의합니다.
//! 등록 완료 응답(`RegistrationResponse`)과 사용자 응답(`UserResponseBody`)이
//! 핵심이며, 비밀 값은 직렬화 출력에서 항상 제외됩니다.
//!
//! # Features
//!
//! - **등록 응답**: 사용자/클라이언트 등록 결과와 엔티티 타입
//! - **사용자 응답**: 비밀번호를 제외한 사용자 프로필 출력
//! - **JSON 헬퍼**: 환경별 출력 형식, 통합 에러 타입
//!
//! # Examples
//!
//! ```rust,ignore
//! use sentinel_dto::domain::dto::users::UserResponseBody;
//! use sentinel_dto::utils::JsonPayload;
//!
//! let body = UserResponseBody::builder()
//!     .id("507f1f77bcf86cd799439011")
//!     .username("john_doe")
//!     .password("hunter2")
//!     .roles(["ROLE_USER"])
//!     .active(true)
//!     .build();
//!
//! let json = body.to_json()?; // "password" 키 없음
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
