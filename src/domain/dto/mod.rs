//! 요청/응답 DTO 모듈
//!
//! - [`tokens`] - IMS 토큰 교환 요청/응답
//! - [`query`] - 인바운드 쿼리 파라미터
//! - [`audit`] - 감사 웹훅 이벤트

pub mod audit;
pub mod query;
pub mod tokens;

pub use audit::*;
pub use query::*;
pub use tokens::*;
