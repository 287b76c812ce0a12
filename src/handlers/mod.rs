//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Dashboard)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 라우트 해석, 응답 조립       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 캐시, 포워더, 감사 웹훅           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   IMS / Query Service / Audit Webhook            ← External
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`proxy`**: 고정 라우트 프록시와 OPTIONS preflight
//! - **`assembler`**: 성공 응답 (본문 원문, CORS, 집계 헤더)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, 상태 코드와 본문은
//! `AppError`의 `ResponseError` 구현이 결정합니다.

pub mod assembler;
pub mod proxy;
