//! 시간 공급자
//!
//! 토큰 캐시의 만료 판단은 `Clock`을 통해서만 현재 시각을 얻습니다.
//! 테스트에서는 임의로 시간을 움직일 수 있는 구현을 주입합니다.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
