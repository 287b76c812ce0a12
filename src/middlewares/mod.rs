//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. CORS 헤더 (cors_headers)
//! - 모든 응답에 고정 CORS 헤더 세트 부착
//! - OPTIONS preflight 응답 생성
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::cors_headers;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(cors_headers())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod cors;

pub use cors::{cors_headers, preflight_response, CORS_HEADERS};
