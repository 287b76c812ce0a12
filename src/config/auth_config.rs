//! # Authentication Configuration Module
//!
//! IMS(OAuth 2.0) 토큰 교환에 필요한 자격 증명을 관리하는 모듈입니다.
//! 모든 값은 호출 시점의 환경 변수에서 읽으므로, 프로세스 재시작 없이
//! 자격 증명을 교체할 수 있습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export IMS_CLIENT_ID="your-ims-client-id"
//! export IMS_CLIENT_SECRET="your-ims-client-secret"
//! export IMS_CLIENT_CODE="your-authorization-code"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export IMS_TOKEN_URL="https://ims-na1.adobelogin.com/ims/token/v1"  # 기본값
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::ImsConfig;
//!
//! let credentials = ImsConfig::credentials()?;
//! let token = token_cache.get_valid_token(&credentials).await?;
//! ```

use std::env;

use crate::domain::models::token::TokenCredentials;
use crate::errors::errors::{AppError, AppResult};

/// IMS 토큰 엔드포인트 기본값
pub const DEFAULT_IMS_TOKEN_URL: &str = "https://ims-na1.adobelogin.com/ims/token/v1";

/// 필수 환경 변수를 읽습니다. 비어 있는 값은 누락으로 취급합니다.
pub(crate) fn required_var(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigurationError(format!("{} must be set", name))),
    }
}

/// 선택적 환경 변수를 읽습니다.
pub(crate) fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub struct ImsConfig;

impl ImsConfig {
    pub fn client_id() -> AppResult<String> {
        required_var("IMS_CLIENT_ID")
    }

    pub fn client_secret() -> AppResult<String> {
        required_var("IMS_CLIENT_SECRET")
    }

    pub fn authorization_code() -> AppResult<String> {
        required_var("IMS_CLIENT_CODE")
    }

    pub fn token_url() -> String {
        optional_var("IMS_TOKEN_URL").unwrap_or_else(|| DEFAULT_IMS_TOKEN_URL.to_string())
    }

    /// 현재 환경 변수로부터 토큰 교환 자격 증명을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수 값이 하나라도 누락된 경우
    pub fn credentials() -> AppResult<TokenCredentials> {
        Ok(TokenCredentials::new(
            Self::client_id()?,
            Self::client_secret()?,
            Self::authorization_code()?,
            Self::token_url(),
        ))
    }
}
