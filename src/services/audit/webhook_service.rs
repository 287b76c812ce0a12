//! 검색 감사 웹훅 전송
//!
//! `searchBy`가 포함된 요청마다 설정된 웹훅 URL로 JSON 이벤트를 POST합니다.
//! 전송 실패는 호출 측에서 경고 로그로만 남기며 프록시 응답에는 영향을 주지 않습니다.

use async_trait::async_trait;

use crate::domain::dto::audit::AuditEvent;
use crate::errors::errors::{AppError, AppResult};

#[async_trait]
pub trait AuditNotifier: Send + Sync {
    async fn notify(&self, webhook_url: &str, event: &AuditEvent) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WebhookNotifier {
    http_client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl AuditNotifier for WebhookNotifier {
    async fn notify(&self, webhook_url: &str, event: &AuditEvent) -> AppResult<()> {
        let response = self
            .http_client
            .post(webhook_url)
            .json(event)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("감사 웹훅 전송 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "감사 웹훅이 {}을 반환했습니다",
                status.as_u16()
            )));
        }

        log::debug!("감사 이벤트 전송 완료 - request_id: {}", event.request_id);
        Ok(())
    }
}
