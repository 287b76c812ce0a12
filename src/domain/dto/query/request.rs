//! 프록시 요청 쿼리 파라미터 DTO
//!
//! 인바운드 요청의 쿼리 문자열(`dateRange`, `searchBy`, `imsOrgId`)을 표현합니다.
//! 같은 키가 여러 번 오면 첫 번째 값을 쓰고, 공백뿐인 값은 `None`으로 정리됩니다.
//! 값의 길이나 형식은 제한하지 않으며, 필수 여부는 라우트가 판단합니다.

use actix_web::web;

use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::clean_optional_string;

/// 프록시 라우트 공통 쿼리 파라미터
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyQuery {
    /// 조회 기간 (허용 목록 밖의 값은 기본값으로 대체)
    pub date_range: Option<String>,
    /// 감사 알림에만 사용되는 검색어
    pub search_by: Option<String>,
    /// IMS 조직 ID (`/bpaReports`에서 필수)
    pub ims_org_id: Option<String>,
}

impl ProxyQuery {
    /// 원본 쿼리 문자열(`?` 제외)을 해석합니다.
    ///
    /// 알 수 없는 키는 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 쿼리 문자열을 키-값 쌍으로 해석할 수 없는 경우
    pub fn from_query_string(raw: &str) -> AppResult<Self> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(raw)
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .into_inner();

        let first = |key: &str| {
            clean_optional_string(
                pairs
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| value.clone()),
            )
        };

        Ok(Self {
            date_range: first("dateRange"),
            search_by: first("searchBy"),
            ims_org_id: first("imsOrgId"),
        })
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::parse_or_default(self.date_range.as_deref())
    }
}

/// 쿼리 서비스가 허용하는 조회 기간
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    LastMonth,
    LastThreeMonths,
    LastSixMonths,
    LastYear,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::LastMonth,
        DateRange::LastThreeMonths,
        DateRange::LastSixMonths,
        DateRange::LastYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::LastMonth => "last 1 month",
            DateRange::LastThreeMonths => "last 3 months",
            DateRange::LastSixMonths => "last 6 months",
            DateRange::LastYear => "last 1 year",
        }
    }

    /// 허용 목록에 있으면 해당 값을, 없거나 인식할 수 없으면 기본값을 반환합니다.
    ///
    /// 비교는 앞뒤 공백과 대소문자를 무시합니다.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return DateRange::default();
        };
        let normalized = raw.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == normalized)
            .unwrap_or_else(|| {
                log::debug!("허용되지 않은 dateRange '{}', 기본값 사용", raw);
                DateRange::default()
            })
    }
}
