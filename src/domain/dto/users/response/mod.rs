//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 조회/등록 결과를 클라이언트에게 전달하는 응답 객체입니다.
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 제외**: `UserResponseBody`는 직렬화 시 출력 전용 투영
//!   `UserResponseView`를 거치므로 비밀번호가 응답에 포함되지 않음
//! - **로그 안전**: `Debug` 구현에서 비밀번호를 마스킹
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "username": "john_doe",
//!   "roles": ["ROLE_USER"],
//!   "active": true,
//!   "department": "Platform",
//!   "region": "APAC"
//! }
//! ```

pub mod user_response_body;

pub use user_response_body::{UserResponseBody, UserResponseBodyBuilder, UserResponseView};
