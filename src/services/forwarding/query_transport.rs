//! 쿼리 서비스 HTTP 전송 계층
//!
//! 포워더가 한 번의 다운스트림 시도를 수행할 때 사용하는 경계입니다.
//! 상태 코드 해석(재시도 여부, 에러 분류)은 포워더의 몫이고, 전송 계층은
//! 상태 코드와 원본 본문 텍스트만 돌려줍니다.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::domain::models::resource::ResourceDescriptor;
use crate::domain::models::token::AccessToken;
use crate::errors::errors::{AppError, AppResult};

/// 다운스트림 응답 (상태 코드 + 디코딩하지 않은 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// `descriptor`의 URL과 헤더에 `Authorization: <token>`을 더해 요청합니다.
    async fn send(
        &self,
        descriptor: &ResourceDescriptor,
        token: &AccessToken,
    ) -> AppResult<UpstreamResponse>;
}

/// reqwest 기반 전송 구현
#[derive(Clone)]
pub struct ReqwestQueryTransport {
    http_client: reqwest::Client,
}

impl ReqwestQueryTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl QueryTransport for ReqwestQueryTransport {
    async fn send(
        &self,
        descriptor: &ResourceDescriptor,
        token: &AccessToken,
    ) -> AppResult<UpstreamResponse> {
        let mut request = self.http_client.get(&descriptor.url);
        for (name, value) in &descriptor.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        // IMS 토큰은 스킴 접두어 없이 그대로 전달
        let response = request
            .header(AUTHORIZATION, token.value())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("쿼리 서비스 요청 실패: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("쿼리 서비스 응답 읽기 실패: {}", e)))?;

        Ok(UpstreamResponse { status, body })
    }
}
