//! IMS 토큰 교환 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
