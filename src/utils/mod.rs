//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`tally`] - JSON 응답의 구조적 배열 집계
//! - [`string_utils`] - 쿼리 파라미터 정리, 로그용 문자열 처리
//! - [`display_terminal`] - 기동 요약 터미널 출력

pub mod display_terminal;
pub mod string_utils;
pub mod tally;
