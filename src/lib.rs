//! 쿼리 엣지 프록시
//!
//! 분석용 쿼리 서비스 앞단에서 동작하는 인증 프록시입니다.
//! 브라우저 대시보드는 자격 증명 없이 고정 경로를 호출하고, 프록시가
//! IMS 액세스 토큰과 API 키를 붙여 쿼리 서비스로 전달합니다.
//!
//! # Features
//!
//! - **토큰 캐시**: 프로세스 전역 단일 슬롯, 만료 60초 전 갱신, single-flight
//! - **재시도**: 다운스트림 401/403 시 토큰 강제 갱신 후 1회 재시도
//! - **배열 집계**: 응답 JSON의 모든 배열 길이 합을 집계 헤더로 노출
//! - **CORS**: 모든 응답에 고정 CORS 헤더, OPTIONS preflight
//! - **감사 웹훅**: `searchBy` 검색 시 선택적 이벤트 전송
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← preflight, /health, 프록시 default service
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 라우트 해석, 응답 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 캐시, 포워더, 감사 웹훅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ IMS + Query Svc │ ← 외부 서비스
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
