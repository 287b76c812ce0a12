//! 도메인 계층 모듈
//!
//! 프록시가 주고받는 데이터 구조를 정의합니다.
//!
//! # Modules
//!
//! - [`models`] - 토큰, 다운스트림 호출 대상 등 핵심 모델
//! - [`dto`] - 외부 인터페이스(IMS, 쿼리 문자열, 웹훅)와 맞닿은 DTO

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
