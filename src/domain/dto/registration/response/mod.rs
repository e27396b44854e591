//! # 등록 응답 DTO 모듈
//!
//! 등록 작업이 끝난 뒤 호출자에게 돌려주는 응답입니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "registeredEntity": {
//!     "username": "john_doe",
//!     "roles": ["ROLE_USER"],
//!     "department": "Platform",
//!     "region": "APAC"
//!   },
//!   "entityType": "USER"
//! }
//! ```
//!
//! `registeredEntity`의 모양은 등록된 엔티티 종류에 따라 달라집니다.

pub mod registration_response;

pub use registration_response::{RegistrationResponse, RegistrationResponseBuilder};
