//! IMS 액세스 토큰과 토큰 교환 자격 증명
//!
//! `AccessToken`은 토큰 캐시만 생성하고 교체합니다. 다른 컴포넌트는
//! 복제본을 읽기 전용으로 사용합니다.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// `expires_in`이 응답에 없을 때 적용하는 토큰 수명 (초)
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// 서버가 알려준 수명의 상한 (1년, 초)
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 365 * 24 * 60 * 60;

/// IMS에서 발급받은 액세스 토큰
///
/// `Debug` 출력에는 토큰 값 대신 지문(fingerprint)만 포함됩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// 발급 시각과 서버가 알려준 수명(초)으로 토큰을 생성합니다.
    ///
    /// 수명은 `0..=MAX_TOKEN_LIFETIME_SECS`로 잘립니다. 음수 수명은 즉시 만료된
    /// 토큰이 되고, 날짜 범위를 넘는 만료 시각은 표현 가능한 최댓값이 됩니다.
    pub fn new(value: String, issued_at: DateTime<Utc>, expires_in_secs: i64) -> Self {
        let lifetime = Duration::seconds(expires_in_secs.clamp(0, MAX_TOKEN_LIFETIME_SECS));
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            value,
            issued_at,
            expires_at,
        }
    }

    /// `Authorization` 헤더에 그대로 실리는 토큰 값
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// `now`가 `expires_at - margin`보다 이전이면 사용 가능한 토큰입니다.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        match self.expires_at.checked_sub_signed(margin) {
            Some(deadline) => now < deadline,
            None => false,
        }
    }

    /// 로그 상관관계용 토큰 지문
    ///
    /// SHA-256 해시 앞 6바이트를 URL-safe base64로 인코딩한 8자 문자열입니다.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.value.as_bytes());
        URL_SAFE_NO_PAD.encode(&digest[..6])
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("fingerprint", &self.fingerprint())
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// IMS authorization code 교환에 쓰이는 자격 증명
///
/// 프로세스 설정에서 한 번 구성되며 읽기 전용입니다.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub authorization_code: String,
    pub token_url: String,
}

impl TokenCredentials {
    pub fn new(
        client_id: String,
        client_secret: String,
        authorization_code: String,
        token_url: String,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            authorization_code,
            token_url,
        }
    }
}

impl fmt::Debug for TokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("authorization_code", &"<redacted>")
            .field("token_url", &self.token_url)
            .finish()
    }
}
