//! 요청 단위 설정 스냅샷
//!
//! 핸들러는 요청마다 `SettingsSource::load()`로 `ProxySettings`를 얻습니다.
//! 운영 환경에서는 환경 변수를 매번 다시 읽고, 테스트에서는 고정 스냅샷을
//! 주입합니다.

use std::sync::Arc;

use crate::config::{AuditConfig, ImsConfig, QueryServiceConfig};
use crate::domain::models::token::TokenCredentials;
use crate::errors::errors::AppResult;

/// 한 요청을 처리하는 데 필요한 설정 값 묶음
#[derive(Debug, Clone)]
pub struct ProxySettings {
    /// 쿼리 서비스 API 키 (`x-api-key`)
    pub api_key: String,
    /// IMS 토큰 교환 자격 증명
    pub credentials: TokenCredentials,
    /// 쿼리 서비스 기본 주소 (끝의 `/` 없음)
    pub query_base_url: String,
    /// 감사 웹훅 주소 (선택사항)
    pub audit_webhook_url: Option<String>,
}

impl ProxySettings {
    /// 현재 환경 변수로부터 설정을 구성합니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            api_key: QueryServiceConfig::api_key()?,
            credentials: ImsConfig::credentials()?,
            query_base_url: QueryServiceConfig::base_url(),
            audit_webhook_url: AuditConfig::webhook_url(),
        })
    }
}

/// 설정을 어디서 읽을지 결정합니다.
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// 요청마다 환경 변수를 읽음
    Environment,
    /// 고정된 설정 스냅샷
    Fixed(Arc<ProxySettings>),
}

impl SettingsSource {
    pub fn fixed(settings: ProxySettings) -> Self {
        SettingsSource::Fixed(Arc::new(settings))
    }

    pub fn load(&self) -> AppResult<Arc<ProxySettings>> {
        match self {
            SettingsSource::Environment => ProxySettings::from_env().map(Arc::new),
            SettingsSource::Fixed(settings) => Ok(Arc::clone(settings)),
        }
    }
}
