//! # Domain Layer
//!
//! 신원/등록 도메인의 응답 계약을 담습니다.
//!
//! - [`dto`] - 등록 응답, 사용자 응답 및 등록 엔티티

pub mod dto;
