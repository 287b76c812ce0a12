//! 성공 응답 조립
//!
//! 업스트림 본문 원문을 그대로 돌려주고, 본문이 JSON이면 배열 집계 값을
//! 라우트의 집계 헤더로 덧붙입니다. 집계가 0이거나 JSON이 아니면 헤더를 생략합니다.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::middlewares::CORS_HEADERS;
use crate::routes::proxy_route::ProxyRoute;
use crate::utils::tally::tally_text;

pub fn assemble_success(route: ProxyRoute, body: String) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    builder.content_type(ContentType::json());

    for (name, value) in CORS_HEADERS {
        builder.insert_header((name, value));
    }

    if let Some(header) = route.count_header() {
        match tally_text(&body) {
            Some(count) if count > 0 => {
                log::info!("{} 집계: {}", route.path(), count);
                builder.insert_header((header, count.to_string()));
            }
            Some(_) => log::debug!("{} 집계: 0 (배열 없음)", route.path()),
            None => log::debug!("{} 응답이 JSON이 아니므로 집계 생략", route.path()),
        }
    }

    builder.body(body)
}
