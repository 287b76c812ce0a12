//! 쿼리 서비스 포워딩
//!
//! - `query_transport`: 한 번의 HTTP 시도
//! - `forwarder`: 토큰 부착, 인증 거부 시 1회 갱신 후 재시도

pub mod forwarder;
pub mod query_transport;

pub use forwarder::*;
pub use query_transport::*;
