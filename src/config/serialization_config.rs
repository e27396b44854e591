//! 실행 환경 및 직렬화 설정 관리 모듈
//!
//! 실행 환경 감지와 JSON 출력 형식 설정을 관리합니다.

use std::env;
use std::sync::Once;

use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::errors::{AppError, AppResult};

static ENV_FILE: Once = Once::new();
static PRETTY_JSON: OnceCell<bool> = OnceCell::new();

/// `.env` 파일을 한 번만 로드합니다.
///
/// 파일이 없어도 에러가 아니며, 이미 설정된 환경 변수는 덮어쓰지 않습니다.
pub fn load_env_file() {
    ENV_FILE.call_once(|| match dotenv::dotenv() {
        Ok(path) => debug!(".env 파일 로드 완료: {}", path.display()),
        Err(e) => debug!(".env 파일 없음, 시스템 환경 변수 사용: {}", e),
    });
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        load_env_file();

        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// JSON 출력 형식 설정
pub struct SerializationConfig;

impl SerializationConfig {
    /// 응답 JSON을 들여쓰기 형식으로 출력할지 여부를 반환합니다.
    ///
    /// 첫 호출 시 한 번만 환경 변수를 읽고, 이후에는 캐시된 값을 돌려줍니다.
    ///
    /// # Environment Variables
    ///
    /// - `JSON_PRETTY`: `true`/`false`/`1`/`0`. 해석할 수 없는 값은 무시하고
    ///   환경별 기본값을 사용합니다.
    pub fn pretty_json() -> bool {
        *PRETTY_JSON.get_or_init(Self::resolve_pretty_json)
    }

    /// 캐시를 거치지 않고 현재 환경 변수에서 출력 형식을 계산합니다.
    pub fn resolve_pretty_json() -> bool {
        load_env_file();

        if let Ok(raw) = env::var("JSON_PRETTY") {
            match Self::parse_flag(&raw) {
                Ok(flag) => return flag,
                Err(e) => warn!("{}, 환경 기본값 사용", e),
            }
        }

        Self::pretty_json_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 기본 출력 형식을 반환합니다.
    ///
    /// - Development/Test: 들여쓰기
    /// - Staging/Production: 압축
    pub fn pretty_json_for_env(env: &Environment) -> bool {
        matches!(env, Environment::Development | Environment::Test)
    }

    /// 불리언 플래그 문자열을 해석합니다.
    pub fn parse_flag(raw: &str) -> AppResult<bool> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(AppError::ConfigError(format!(
                "JSON_PRETTY 값을 해석할 수 없습니다: '{}'",
                other
            ))),
        }
    }
}
