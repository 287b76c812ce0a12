//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 네트워크 경계마다 trait을 두고, 실제 구현은 `reqwest::Client`를 공유합니다.
//! 테스트에서는 `testing` 모듈의 대역 구현을 주입합니다.
//!
//! # Modules
//!
//! - `auth`: IMS 토큰 교환과 프로세스 전역 토큰 캐시
//! - `forwarding`: 쿼리 서비스 호출과 인증 거부 시 재시도
//! - `audit`: 검색 감사 웹훅 전송
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{ImsTokenExchanger, SystemClock, TokenCache};
//! use crate::services::forwarding::{ReqwestQueryTransport, ResilientForwarder};
//!
//! let cache = Arc::new(TokenCache::new(Arc::new(ImsTokenExchanger::new(client.clone())), Arc::new(SystemClock)));
//! let forwarder = ResilientForwarder::new(cache.clone(), Arc::new(ReqwestQueryTransport::new(client)));
//! let outcome = forwarder.forward(&descriptor, &credentials).await?;
//! ```

pub mod audit;
pub mod auth;
pub mod forwarding;

#[cfg(test)]
pub mod testing;
