//! 도메인 모델 모듈
//!
//! - [`token`] - IMS 액세스 토큰과 자격 증명
//! - [`resource`] - 다운스트림 호출 대상 기술자

pub mod resource;
pub mod token;

pub use resource::*;
pub use token::*;
