//! 감사 웹훅 이벤트 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// `searchBy` 검색 시 웹훅으로 전송되는 감사 이벤트
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// 이벤트 종류 (현재는 항상 "search")
    pub event: &'static str,
    /// 인바운드 라우트 경로
    pub route: String,
    /// 사용자가 입력한 검색어
    pub search_by: String,
    /// 로그 상관관계용 요청 ID
    pub request_id: Uuid,
    /// 이벤트 발생 시각
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    pub fn search(route: &str, search_by: &str, request_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            event: "search",
            route: route.to_string(),
            search_by: search_by.to_string(),
            request_id,
            timestamp,
        }
    }
}
