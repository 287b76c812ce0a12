//! API 라우트 설정 모듈
//!
//! 프록시는 고정 경로 세 개만 업스트림으로 전달하고, 나머지는 404로 응답합니다.
//!
//! # Registration order
//!
//! 1. `OPTIONS /{tail}` - 모든 경로의 preflight (네트워크 호출 없음)
//! 2. `GET /health` - 헬스 체크
//! 3. default service - 프록시 핸들러 (경로 해석은 [`proxy_route::ProxyRoute`])
//!
//! 프록시 라우트를 default service로 두므로 어떤 메서드로 들어오든 같은 경로
//! 테이블로 해석되고, 테이블에 없는 경로는 핸들러가 `NotFound`를 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

pub mod proxy_route;

use actix_web::{guard, web, HttpResponse};
use serde_json::json;

use crate::core::AppState;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(handlers::proxy::preflight),
    );

    // Health check endpoint
    cfg.service(health_check);

    cfg.default_service(web::to(handlers::proxy::proxy_request));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 업스트림을 호출하지 않으며 토큰 값 대신 캐시 여부만 노출합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "query_edge_proxy",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "token_cached": true
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "token_cached": state.token_cache.has_valid_token().await,
    }))
}
