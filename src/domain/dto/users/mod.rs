//! # 사용자 DTO 모듈

pub mod response;

pub use response::{UserResponseBody, UserResponseBodyBuilder, UserResponseView};
