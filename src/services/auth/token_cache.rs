//! # IMS 액세스 토큰 캐시
//!
//! 프로세스 전체가 공유하는 단일 슬롯 토큰 캐시입니다. 슬롯의 토큰이
//! `만료 시각 - 안전 여유(60초)` 이전이면 네트워크 호출 없이 그대로 돌려주고,
//! 그렇지 않으면 IMS 토큰 교환을 수행해 슬롯을 통째로 교체합니다.
//!
//! ## 동시성
//!
//! - 빠른 경로: 읽기 잠금으로 슬롯을 확인
//! - 느린 경로: 쓰기 잠금을 잡은 뒤 한 번 더 확인하고 교환 (single-flight)
//!
//! 여러 요청이 동시에 만료된 슬롯을 보더라도 교환은 한 번만 일어나고,
//! 나머지는 쓰기 잠금 뒤에서 기다렸다가 새 토큰을 재사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let cache = TokenCache::new(Arc::new(ImsTokenExchanger::new(client)), Arc::new(SystemClock));
//! let token = cache.get_valid_token(&credentials).await?;
//!
//! // 다운스트림이 401/403을 반환한 경우
//! cache.invalidate().await;
//! let fresh = cache.get_valid_token(&credentials).await?;
//! ```

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;

use crate::domain::models::token::{AccessToken, TokenCredentials};
use crate::errors::errors::AppResult;
use crate::services::auth::clock::Clock;
use crate::services::auth::ims_exchange_service::TokenExchanger;

/// 만료 전 갱신 여유 (밀리초)
pub const TOKEN_REFRESH_MARGIN_MS: i64 = 60_000;

pub struct TokenCache {
    exchanger: Arc<dyn TokenExchanger>,
    clock: Arc<dyn Clock>,
    margin: Duration,
    slot: RwLock<Option<AccessToken>>,
}

impl TokenCache {
    pub fn new(exchanger: Arc<dyn TokenExchanger>, clock: Arc<dyn Clock>) -> Self {
        Self {
            exchanger,
            clock,
            margin: Duration::milliseconds(TOKEN_REFRESH_MARGIN_MS),
            slot: RwLock::new(None),
        }
    }

    /// 유효한 액세스 토큰을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthExchangeError` - IMS가 교환을 거부한 경우
    /// * `AppError::ExternalServiceError` - IMS에 연결할 수 없는 경우
    /// * `AppError::InternalError` - 토큰 응답을 해석할 수 없는 경우
    pub async fn get_valid_token(&self, credentials: &TokenCredentials) -> AppResult<AccessToken> {
        {
            let slot = self.slot.read().await;
            if let Some(token) = self.fresh(slot.as_ref()) {
                return Ok(token);
            }
        }

        let mut slot = self.slot.write().await;

        // 대기하는 동안 다른 요청이 이미 갱신했을 수 있음
        if let Some(token) = self.fresh(slot.as_ref()) {
            log::debug!("동시 갱신된 토큰 재사용 - fingerprint: {}", token.fingerprint());
            return Ok(token);
        }

        let issued_at = self.clock.now();
        let response = self.exchanger.exchange(credentials).await?;
        let token = AccessToken::new(response.access_token, issued_at, response.expires_in);

        log::info!(
            "IMS 토큰 발급 - fingerprint: {}, expires_at: {}",
            token.fingerprint(),
            token.expires_at().to_rfc3339()
        );

        *slot = Some(token.clone());
        Ok(token)
    }

    /// 캐시된 토큰을 비워 다음 `get_valid_token` 호출이 새로 교환하도록 합니다.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        if let Some(token) = slot.take() {
            log::info!("IMS 토큰 무효화 - fingerprint: {}", token.fingerprint());
        }
    }

    /// 지금 바로 재사용 가능한 토큰이 있는지 확인합니다 (헬스 체크용).
    pub async fn has_valid_token(&self) -> bool {
        let slot = self.slot.read().await;
        self.fresh(slot.as_ref()).is_some()
    }

    fn fresh(&self, token: Option<&AccessToken>) -> Option<AccessToken> {
        let now = self.clock.now();
        token
            .filter(|token| token.is_fresh_at(now, self.margin))
            .cloned()
    }
}
