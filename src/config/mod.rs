//! # Configuration Module
//!
//! 프록시의 설정 관리를 담당하는 모듈입니다.
//! 모든 값은 환경 변수 기반이며, 요청 시점에 다시 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - IMS 토큰 교환 자격 증명
//! - [`data_config`] - 쿼리 서비스, 감사 웹훅, 서버 바인딩 설정
//! - [`settings`] - 요청 단위 설정 스냅샷과 주입 지점
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export QUERY_SERVICE_API_KEY="your-api-key"
//! export IMS_CLIENT_ID="your-client-id"
//! export IMS_CLIENT_SECRET="your-client-secret"
//! export IMS_CLIENT_CODE="your-authorization-code"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export IMS_TOKEN_URL="https://ims-na1.adobelogin.com/ims/token/v1"
//! export QUERY_SERVICE_URL="https://query.example.com"
//! export USE_LOCAL_QUERY_SERVICE="true"
//! export LOCAL_QUERY_SERVICE_URL="http://localhost:8000"
//! export AUDIT_WEBHOOK_URL="https://hooks.example.com/audit"
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! ```
//!
//! 필수 값이 없으면 서버는 그대로 기동하고, 해당 요청만 500으로 응답합니다.

pub mod auth_config;
pub mod data_config;
pub mod settings;

pub use auth_config::*;
pub use data_config::*;
pub use settings::*;
