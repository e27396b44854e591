//! # Configuration Module
//!
//! 응답 DTO 크레이트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수(및 `.env` 파일) 기반의 설정값을 한 곳에서 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`serialization_config`] - 실행 환경 감지, JSON 출력 형식
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use sentinel_dto::config::{Environment, SerializationConfig};
//!
//! let env = Environment::current();
//! let pretty = SerializationConfig::pretty_json();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export JSON_PRETTY="false"       # 미설정 시 환경별 기본값
//! ```

pub mod serialization_config;

pub use serialization_config::*;
