use serde::Deserialize;

use crate::domain::models::token::DEFAULT_TOKEN_LIFETIME_SECS;

fn default_expires_in() -> i64 {
    DEFAULT_TOKEN_LIFETIME_SECS
}

/// IMS 토큰 교환 응답
///
/// `access_token` 외의 필드는 선택사항이며, 알 수 없는 필드는 무시합니다.
#[derive(Debug, Deserialize)]
pub struct ImsTokenResponse {
    /// IMS 액세스 토큰
    pub access_token: String,
    /// 토큰 만료 시간 (초 단위, 없거나 null이면 3600)
    #[serde(default = "default_expires_in", deserialize_with = "deserialize_expires_in")]
    pub expires_in: i64,
    /// 토큰 타입 (보통 "bearer")
    #[serde(default)]
    pub token_type: Option<String>,
}

fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS))
}
