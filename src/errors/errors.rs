//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 프록시 파이프라인(라우터, 토큰 캐시, 포워더)에서 발생하는 모든 실패를
//! 하나의 `AppError`로 모으고, `actix_web::ResponseError` 구현을 통해
//! 일관된 평문 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `BadRequest` | 400 | `Bad request: ...` |
//! | `NotFound` | 404 | `Not found: ...` |
//! | `AuthExchangeError` | 502 | `IMS auth failed: <status>` |
//! | `UpstreamError` | 502 | `Query service returned error: <status>` |
//! | `ExternalServiceError` | 500 | 원본 에러 메시지 |
//! | `ConfigurationError` | 500 | 원본 에러 메시지 |
//! | `InternalError` | 500 | 원본 에러 메시지 |
//!
//! 모든 에러 응답에는 CORS 헤더가 예외 없이 포함됩니다.
//! 브라우저 클라이언트가 실패 상세 내용을 읽을 수 있어야 하기 때문입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn require_org(org: Option<&str>) -> AppResult<&str> {
//!     org.ok_or_else(|| AppError::BadRequest("imsOrgId is required".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use thiserror::Error;

use crate::middlewares::cors::CORS_HEADERS;

/// 애플리케이션 전역 에러 타입
///
/// 응답 본문은 `Display` 구현 그대로 전송되므로, 메시지에 토큰이나
/// 클라이언트 시크릿 같은 민감 정보를 담아서는 안 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 쿼리 파라미터 누락 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 알 수 없는 라우트 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// IMS 토큰 교환이 성공 상태를 반환하지 않음 (502 Bad Gateway)
    #[error("IMS auth failed: {status}")]
    AuthExchangeError { status: u16 },

    /// 재시도 이후에도 쿼리 서비스가 실패 상태를 반환 (502 Bad Gateway)
    #[error("Query service returned error: {status}")]
    UpstreamError { status: u16 },

    /// 외부 서비스 연결 실패, 응답 본문 읽기 실패 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 필수 환경 변수 누락 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// IMS 또는 쿼리 서비스 측 실패로 분류되는 에러인지 확인합니다.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            AppError::AuthExchangeError { .. } | AppError::UpstreamError { .. }
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthExchangeError { .. } | AppError::UpstreamError { .. } => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문은 에러 메시지 평문이며, CORS 헤더 세트를 항상 덧붙입니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(self.status_code());
        builder.content_type(ContentType::plaintext());

        for (name, value) in CORS_HEADERS {
            builder.insert_header((name, value));
        }

        builder.body(self.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("imsOrgId is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("/unknown".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_gateway_errors_map_to_502() {
        let auth = AppError::AuthExchangeError { status: 400 };
        let upstream = AppError::UpstreamError { status: 401 };

        assert_eq!(auth.error_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream.error_response().status(), StatusCode::BAD_GATEWAY);
        assert!(auth.is_gateway_failure());
        assert!(upstream.is_gateway_failure());
    }

    #[test]
    fn test_unexpected_errors_map_to_500() {
        let errors = [
            AppError::ExternalServiceError("connection refused".to_string()),
            AppError::ConfigurationError("IMS_CLIENT_ID must be set".to_string()),
            AppError::InternalError("Something went wrong".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!error.is_gateway_failure());
        }
    }

    #[actix_web::test]
    async fn test_error_body_contains_upstream_status() {
        let response = AppError::UpstreamError { status: 503 }.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();

        assert_eq!(&body[..], b"Query service returned error: 503");
    }

    #[test]
    fn test_error_response_carries_cors_headers() {
        let response = AppError::InternalError("boom".to_string()).error_response();

        for (name, value) in CORS_HEADERS {
            assert_eq!(response.headers().get(name).unwrap(), value);
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
