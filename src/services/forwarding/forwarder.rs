//! # 재시도 포워더
//!
//! 토큰 캐시에서 토큰을 얻어 쿼리 서비스를 호출하고, 인증 거부(401/403)를
//! 받으면 토큰을 강제 갱신한 뒤 정확히 한 번만 재시도합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! NotAttempted ──TokenIssued──► FirstAttempt ──Responded(2xx)────► Success
//!                                    │
//!                                    ├──Responded(401|403)──► AuthFailure
//!                                    │                            │
//!                                    │                       TokenIssued
//!                                    │                            ▼
//!                                    │                        Refreshed
//!                                    │                            │
//!                                    │                       Dispatched
//!                                    │                            ▼
//!                                    │                      SecondAttempt ──Responded(2xx)──► Success
//!                                    │                            │
//!                                    └──Responded(other)──►   Failure ◄──Responded(other)──┘
//! ```
//!
//! `SecondAttempt`에서 `AuthFailure`로 가는 전이가 없으므로 요청당
//! 다운스트림 시도는 최대 2회, 강제 갱신은 최대 1회입니다.

use std::sync::Arc;

use actix_web::http::StatusCode;

use crate::domain::models::resource::ResourceDescriptor;
use crate::domain::models::token::{AccessToken, TokenCredentials};
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::TokenCache;
use crate::services::forwarding::query_transport::{QueryTransport, UpstreamResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardState {
    NotAttempted,
    FirstAttempt,
    AuthFailure,
    Refreshed,
    SecondAttempt,
    Success,
    Failure(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardEvent {
    /// 토큰 캐시가 토큰을 돌려줌
    TokenIssued,
    /// 갱신된 토큰으로 재시도를 보냄
    Dispatched,
    /// 다운스트림이 상태 코드로 응답함
    Responded(u16),
}

fn is_auth_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl ForwardState {
    /// 다음 상태를 계산합니다. 정의되지 않은 전이는 `None`입니다.
    pub fn advance(self, event: ForwardEvent) -> Option<ForwardState> {
        use ForwardEvent::*;
        use ForwardState::*;

        match (self, event) {
            (NotAttempted, TokenIssued) => Some(FirstAttempt),
            (FirstAttempt, Responded(status)) if is_success(status) => Some(Success),
            (FirstAttempt, Responded(status)) if is_auth_rejection(status) => Some(AuthFailure),
            (FirstAttempt, Responded(status)) => Some(Failure(status)),
            (AuthFailure, TokenIssued) => Some(Refreshed),
            (Refreshed, Dispatched) => Some(SecondAttempt),
            (SecondAttempt, Responded(status)) if is_success(status) => Some(Success),
            (SecondAttempt, Responded(status)) => Some(Failure(status)),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ForwardState::Success | ForwardState::Failure(_))
    }
}

/// 포워딩 성공 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardOutcome {
    /// 쿼리 서비스 응답 본문 원문
    pub body: String,
    pub status: u16,
    /// 다운스트림 시도 횟수 (1 또는 2)
    pub attempts: u8,
    /// 인증 거부로 토큰을 강제 갱신했는지 여부
    pub refreshed: bool,
}

pub struct ResilientForwarder {
    token_cache: Arc<TokenCache>,
    transport: Arc<dyn QueryTransport>,
}

impl ResilientForwarder {
    pub fn new(token_cache: Arc<TokenCache>, transport: Arc<dyn QueryTransport>) -> Self {
        Self {
            token_cache,
            transport,
        }
    }

    /// 다운스트림 호출을 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamError` - 마지막 시도가 2xx가 아닌 경우
    /// * 토큰 캐시, 전송 계층에서 발생한 에러는 그대로 전파
    pub async fn forward(
        &self,
        descriptor: &ResourceDescriptor,
        credentials: &TokenCredentials,
    ) -> AppResult<ForwardOutcome> {
        let mut state = ForwardState::NotAttempted;
        let mut token: Option<AccessToken> = None;
        let mut attempts: u8 = 0;

        loop {
            let event = match state {
                ForwardState::NotAttempted => {
                    token = Some(self.token_cache.get_valid_token(credentials).await?);
                    ForwardEvent::TokenIssued
                }
                ForwardState::AuthFailure => {
                    self.token_cache.invalidate().await;
                    token = Some(self.token_cache.get_valid_token(credentials).await?);
                    ForwardEvent::TokenIssued
                }
                ForwardState::Refreshed => ForwardEvent::Dispatched,
                ForwardState::FirstAttempt | ForwardState::SecondAttempt => {
                    let current = token.as_ref().ok_or_else(|| {
                        AppError::InternalError("포워딩 시도 전에 토큰이 없습니다".to_string())
                    })?;
                    attempts += 1;
                    let response = self.transport.send(descriptor, current).await?;

                    log::debug!(
                        "쿼리 서비스 응답 - url: {}, attempt: {}, status: {}, token: {}",
                        descriptor.url,
                        attempts,
                        response.status,
                        current.fingerprint()
                    );

                    let next = self.transition(state, ForwardEvent::Responded(response.status))?;
                    if next == ForwardState::Success {
                        return Ok(self.outcome(response, attempts));
                    }
                    if next == ForwardState::AuthFailure {
                        log::warn!(
                            "쿼리 서비스 인증 거부 ({}), 토큰 갱신 후 1회 재시도 - token: {}",
                            response.status,
                            current.fingerprint()
                        );
                    }
                    state = next;
                    continue;
                }
                ForwardState::Failure(status) => {
                    log::warn!(
                        "쿼리 서비스 실패 - url: {}, status: {}, attempts: {}",
                        descriptor.url,
                        status,
                        attempts
                    );
                    return Err(AppError::UpstreamError { status });
                }
                ForwardState::Success => {
                    return Err(AppError::InternalError(
                        "응답 없이 성공 상태에 도달했습니다".to_string(),
                    ));
                }
            };

            state = self.transition(state, event)?;
        }
    }

    fn transition(&self, state: ForwardState, event: ForwardEvent) -> AppResult<ForwardState> {
        state.advance(event).ok_or_else(|| {
            AppError::InternalError(format!("잘못된 포워딩 상태 전이: {:?} + {:?}", state, event))
        })
    }

    fn outcome(&self, response: UpstreamResponse, attempts: u8) -> ForwardOutcome {
        ForwardOutcome {
            body: response.body,
            status: StatusCode::OK.as_u16(),
            attempts,
            refreshed: attempts > 1,
        }
    }
}
