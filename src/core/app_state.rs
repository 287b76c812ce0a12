//! # 애플리케이션 상태
//!
//! 워커 스레드 전체가 공유하는 협력 객체 묶음입니다. `main`에서 한 번 구성해
//! `web::Data<AppState>`로 등록하고, 핸들러는 추출자로 꺼내 씁니다.
//!
//! ```text
//! AppState
//! ├── settings   : SettingsSource           (요청마다 설정 스냅샷)
//! ├── token_cache: Arc<TokenCache>          (프로세스 전역 단일 슬롯)
//! ├── forwarder  : ResilientForwarder       (token_cache 공유)
//! └── notifier   : Arc<dyn AuditNotifier>   (감사 웹훅)
//! ```
//!
//! 토큰 캐시는 `Arc`로 한 번만 만들어 모든 워커의 포워더와 헬스 체크가 같은 슬롯을 봅니다.

use std::sync::Arc;

use crate::config::SettingsSource;
use crate::services::audit::{AuditNotifier, WebhookNotifier};
use crate::services::auth::{ImsTokenExchanger, SystemClock, TokenCache};
use crate::services::forwarding::{QueryTransport, ReqwestQueryTransport, ResilientForwarder};

pub struct AppState {
    pub settings: SettingsSource,
    pub token_cache: Arc<TokenCache>,
    pub forwarder: ResilientForwarder,
    pub notifier: Arc<dyn AuditNotifier>,
}

impl AppState {
    pub fn new(
        settings: SettingsSource,
        token_cache: Arc<TokenCache>,
        transport: Arc<dyn QueryTransport>,
        notifier: Arc<dyn AuditNotifier>,
    ) -> Self {
        let forwarder = ResilientForwarder::new(Arc::clone(&token_cache), transport);

        Self {
            settings,
            token_cache,
            forwarder,
            notifier,
        }
    }

    /// 운영 구성: 환경 변수 설정 + reqwest 기반 네트워크 구현
    ///
    /// 모든 네트워크 구현이 같은 `reqwest::Client` 커넥션 풀을 공유합니다.
    pub fn from_env(http_client: reqwest::Client) -> Self {
        let token_cache = Arc::new(TokenCache::new(
            Arc::new(ImsTokenExchanger::new(http_client.clone())),
            Arc::new(SystemClock),
        ));

        Self::new(
            SettingsSource::Environment,
            token_cache,
            Arc::new(ReqwestQueryTransport::new(http_client.clone())),
            Arc::new(WebhookNotifier::new(http_client)),
        )
    }
}
