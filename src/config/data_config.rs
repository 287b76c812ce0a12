//! 쿼리 서비스, 감사 웹훅, 서버 설정 관리 모듈
//!
//! 업스트림 쿼리 서비스 주소와 API 키, 선택적 감사 웹훅, HTTP 서버 바인딩
//! 설정을 관리합니다.

use crate::config::auth_config::{optional_var, required_var};
use crate::errors::errors::AppResult;

/// 운영 쿼리 서비스 주소
pub const DEFAULT_QUERY_SERVICE_URL: &str =
    "https://cq-aem-cloud-adoption-query-service-deploy-ethos12-102c74.cloud.adobe.io";

/// 로컬 개발용 쿼리 서비스 주소
pub const DEFAULT_LOCAL_QUERY_SERVICE_URL: &str = "http://localhost:8000";

/// 플래그 형태의 환경 변수 값을 해석합니다.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

pub struct QueryServiceConfig;

impl QueryServiceConfig {
    pub fn api_key() -> AppResult<String> {
        required_var("QUERY_SERVICE_API_KEY")
    }

    pub fn use_local() -> bool {
        optional_var("USE_LOCAL_QUERY_SERVICE")
            .map(|value| parse_flag(&value))
            .unwrap_or(false)
    }

    /// 현재 요청에 사용할 쿼리 서비스 기본 주소를 반환합니다.
    ///
    /// `USE_LOCAL_QUERY_SERVICE`가 켜져 있으면 `LOCAL_QUERY_SERVICE_URL`을,
    /// 아니면 `QUERY_SERVICE_URL`을 사용합니다. 끝의 `/`는 제거됩니다.
    pub fn base_url() -> String {
        let url = if Self::use_local() {
            optional_var("LOCAL_QUERY_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_LOCAL_QUERY_SERVICE_URL.to_string())
        } else {
            optional_var("QUERY_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_QUERY_SERVICE_URL.to_string())
        };

        url.trim_end_matches('/').to_string()
    }
}

pub struct AuditConfig;

impl AuditConfig {
    pub fn webhook_url() -> Option<String> {
        optional_var("AUDIT_WEBHOOK_URL")
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        optional_var("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        optional_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        optional_var("WORKERS")
            .and_then(|value| value.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
