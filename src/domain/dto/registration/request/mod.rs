//! # 등록 요청 DTO 모듈
//!
//! 등록 응답에 담기는 엔티티의 구체 타입들입니다.
//!
//! - `UserRegistrationRequest` - 사용자 계정 등록
//! - `ClientRegistrationRequest` - OAuth 클라이언트 등록
//!
//! 두 타입 모두 비밀 값(`password`, `clientSecret`)을 입력으로는 받지만
//! 직렬화 출력과 `Debug` 출력에는 노출하지 않습니다.

pub mod client_registration;
pub mod user_registration;

pub use client_registration::ClientRegistrationRequest;
pub use user_registration::UserRegistrationRequest;
