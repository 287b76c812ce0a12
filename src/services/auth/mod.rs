//! 인증 서비스 모듈
//!
//! IMS OAuth 2.0 토큰의 발급과 캐싱을 담당합니다.
//!
//! # Features
//!
//! - authorization code grant 기반 IMS 토큰 교환
//! - 단일 슬롯 토큰 캐시 (만료 60초 전 선제 갱신, single-flight)
//! - 다운스트림 인증 실패 시 캐시 무효화
//!
//! # Security
//!
//! - 토큰 값은 로그에 남기지 않고 SHA-256 지문만 기록
//! - 클라이언트 시크릿과 authorization code는 `Debug` 출력에서 가림
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{ImsTokenExchanger, SystemClock, TokenCache};
//!
//! let cache = TokenCache::new(
//!     Arc::new(ImsTokenExchanger::new(reqwest::Client::new())),
//!     Arc::new(SystemClock),
//! );
//! let token = cache.get_valid_token(&credentials).await?;
//! ```

pub mod clock;
pub mod ims_exchange_service;
pub mod token_cache;

pub use clock::*;
pub use ims_exchange_service::*;
pub use token_cache::*;
