//! 고정 CORS 헤더 세트
//!
//! 프록시는 Origin 검사 없이 모든 응답에 같은 CORS 헤더를 붙입니다.
//! 핸들러와 `AppError::error_response`가 직접 헤더를 넣고,
//! `cors_headers()` 미들웨어가 그 외 경로(추출기 실패 등)를 보완합니다.

use actix_web::HttpResponse;
use actix_web::middleware::DefaultHeaders;

/// 모든 응답에 포함되는 CORS 헤더 `(이름, 값)` 목록
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

/// 응답에 CORS 헤더가 없을 때만 채워 넣는 미들웨어를 생성합니다.
///
/// # Examples
///
/// ```rust,ignore
/// App::new()
///     .wrap(cors_headers())
///     .configure(configure_all_routes)
/// ```
pub fn cors_headers() -> DefaultHeaders {
    CORS_HEADERS
        .iter()
        .fold(DefaultHeaders::new(), |headers, &(name, value)| {
            headers.add((name, value))
        })
}

/// 빈 본문의 preflight 응답을 생성합니다.
pub fn preflight_response() -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    for (name, value) in CORS_HEADERS {
        builder.insert_header((name, value));
    }
    builder.finish()
}
