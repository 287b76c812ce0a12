//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다. 서비스 간 의존성은 생성자 주입으로 연결하고,
//! 완성된 [`AppState`]를 actix-web 앱 데이터로 공유합니다.

pub mod app_state;

pub use app_state::*;
