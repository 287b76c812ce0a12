//! # 프록시 핸들러
//!
//! 고정 라우트 테이블에 있는 경로로 들어온 요청을 쿼리 서비스로 전달합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! 1. 경로 → ProxyRoute         (알 수 없는 경로: 404)
//! 2. 쿼리 파싱                 (중복 키는 첫 값)
//! 3. 라우트별 필수 파라미터    (400)
//! 4. 설정 스냅샷 로드          (500)
//! 5. 감사 웹훅 (searchBy)      (실패해도 계속)
//! 6. 토큰 + 포워딩 + 재시도    (502 / 500)
//! 7. 응답 조립                 (본문 원문 + 집계 헤더)
//! ```
//!
//! 1~3단계는 네트워크 호출 없이 끝납니다.

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::core::AppState;
use crate::domain::dto::audit::AuditEvent;
use crate::domain::dto::query::ProxyQuery;
use crate::errors::errors::{AppError, AppResult};
use crate::handlers::assembler::assemble_success;
use crate::middlewares::preflight_response;
use crate::routes::proxy_route::ProxyRoute;
use crate::utils::string_utils::truncate_for_log;

/// 모든 경로의 OPTIONS 요청: 빈 본문 200 + CORS 헤더
pub async fn preflight() -> HttpResponse {
    preflight_response()
}

pub async fn proxy_request(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();

    log::debug!("[{}] {} {}", request_id, req.method(), req.path());

    handle(&req, &state, request_id).await.map_err(|e| {
        if e.is_gateway_failure() {
            log::warn!("[{}] {} 업스트림 실패: {}", request_id, req.path(), e);
        } else {
            log::error!("[{}] {} 처리 실패: {}", request_id, req.path(), e);
        }
        e
    })
}

async fn handle(req: &HttpRequest, state: &AppState, request_id: Uuid) -> AppResult<HttpResponse> {
    let route = ProxyRoute::from_path(req.path())?;

    let query = ProxyQuery::from_query_string(req.query_string())?;
    route.require_params(&query)?;

    let settings = state.settings.load()?;
    let descriptor = route.resolve(&query, &settings.query_base_url, &settings.api_key)?;

    if let (Some(search_by), Some(webhook_url)) = (&query.search_by, &settings.audit_webhook_url) {
        log::info!(
            "[{}] {} 검색 - searchBy: {}",
            request_id,
            route.path(),
            truncate_for_log(search_by, 64)
        );

        let event = AuditEvent::search(route.path(), search_by, request_id, Utc::now());
        if let Err(e) = state.notifier.notify(webhook_url, &event).await {
            log::warn!("[{}] 감사 웹훅 전송 실패: {}", request_id, e);
        }
    }

    let outcome = state.forwarder.forward(&descriptor, &settings.credentials).await?;

    log::info!(
        "[{}] {} 완료 - attempts: {}, refreshed: {}",
        request_id,
        route.path(),
        outcome.attempts,
        outcome.refreshed
    );

    Ok(assemble_success(route, outcome.body))
}
