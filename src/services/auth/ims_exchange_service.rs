//! # IMS 토큰 교환 서비스
//!
//! OAuth 2.0 authorization code grant로 IMS 액세스 토큰을 발급받습니다.
//!
//! ```text
//! ┌─────────────────┐  POST application/x-www-form-urlencoded   ┌─────────────────┐
//! │   TokenCache    │ ────────────────────────────────────────► │  IMS /token/v1  │
//! │                 │   grant_type=authorization_code           │                 │
//! │                 │   client_id, client_secret, code          │                 │
//! │                 │ ◄──────────────────────────────────────── │                 │
//! └─────────────────┘   {"access_token": "...", "expires_in"}   └─────────────────┘
//! ```
//!
//! ## 에러 매핑
//!
//! | 상황 | AppError |
//! |------|----------|
//! | 연결 실패, 본문 읽기 실패 | `ExternalServiceError` |
//! | 2xx 이외의 상태 코드 | `AuthExchangeError { status }` |
//! | JSON 파싱 실패, `access_token` 누락 | `InternalError` |

use async_trait::async_trait;

use crate::domain::dto::tokens::{ImsTokenRequest, ImsTokenResponse};
use crate::domain::models::token::TokenCredentials;
use crate::errors::errors::{AppError, AppResult, ErrorContext};

/// 자격 증명을 토큰 응답으로 교환하는 네트워크 경계
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange(&self, credentials: &TokenCredentials) -> AppResult<ImsTokenResponse>;
}

/// reqwest 기반 IMS 토큰 교환 구현
#[derive(Clone)]
pub struct ImsTokenExchanger {
    http_client: reqwest::Client,
}

impl ImsTokenExchanger {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl TokenExchanger for ImsTokenExchanger {
    async fn exchange(&self, credentials: &TokenCredentials) -> AppResult<ImsTokenResponse> {
        let form = ImsTokenRequest::authorization_code(
            &credentials.client_id,
            &credentials.client_secret,
            &credentials.authorization_code,
        );

        log::debug!("IMS 토큰 교환 요청: {}", credentials.token_url);

        let response = self
            .http_client
            .post(&credentials.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("IMS 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("IMS 토큰 교환 거부됨 - status: {}", status.as_u16());
            return Err(AppError::AuthExchangeError {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("IMS 토큰 응답 읽기 실패: {}", e)))?;

        serde_json::from_str::<ImsTokenResponse>(&body).context("IMS 토큰 응답 파싱 실패")
    }
}
