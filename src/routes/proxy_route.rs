//! 프록시 라우트 테이블
//!
//! | 인바운드 경로 | 전달 쿼리 | 집계 헤더 |
//! |---------------|-----------|-----------|
//! | `/ingestionsLast30Days` | 없음 | `X-Ingestions-Count` |
//! | `/bpaReports` | `imsOrgId` (필수), `dateRange` | `X-BpaReports-Count` |
//! | `/customerMigrationInfo` | `dateRange` | 없음 |
//!
//! 업스트림 경로는 인바운드 경로와 같습니다.

use crate::domain::dto::query::ProxyQuery;
use crate::domain::models::resource::ResourceDescriptor;
use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyRoute {
    IngestionsLast30Days,
    BpaReports,
    CustomerMigrationInfo,
}

impl ProxyRoute {
    pub const ALL: [ProxyRoute; 3] = [
        ProxyRoute::IngestionsLast30Days,
        ProxyRoute::BpaReports,
        ProxyRoute::CustomerMigrationInfo,
    ];

    /// 인바운드 경로를 라우트로 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 알려지지 않은 경로
    pub fn from_path(path: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| AppError::NotFound(path.to_string()))
    }

    pub fn path(&self) -> &'static str {
        match self {
            ProxyRoute::IngestionsLast30Days => "/ingestionsLast30Days",
            ProxyRoute::BpaReports => "/bpaReports",
            ProxyRoute::CustomerMigrationInfo => "/customerMigrationInfo",
        }
    }

    /// 응답 본문 집계 값을 싣는 헤더 이름
    pub fn count_header(&self) -> Option<&'static str> {
        match self {
            ProxyRoute::IngestionsLast30Days => Some("X-Ingestions-Count"),
            ProxyRoute::BpaReports => Some("X-BpaReports-Count"),
            ProxyRoute::CustomerMigrationInfo => None,
        }
    }

    /// 라우트별 필수 파라미터를 확인합니다. 네트워크 호출 전에 실행됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - `/bpaReports`에 `imsOrgId`가 없는 경우
    pub fn require_params(&self, query: &ProxyQuery) -> AppResult<()> {
        if *self == ProxyRoute::BpaReports && query.ims_org_id.is_none() {
            return Err(AppError::BadRequest("imsOrgId is required".to_string()));
        }
        Ok(())
    }

    /// 업스트림 쿼리 문자열 (`?` 포함, 없으면 빈 문자열)
    pub fn upstream_query(&self, query: &ProxyQuery) -> String {
        let date_range = urlencoding::encode(query.date_range().as_str());

        match self {
            ProxyRoute::IngestionsLast30Days => String::new(),
            ProxyRoute::BpaReports => format!(
                "?imsOrgId={}&dateRange={}",
                urlencoding::encode(query.ims_org_id.as_deref().unwrap_or_default()),
                date_range
            ),
            ProxyRoute::CustomerMigrationInfo => format!("?dateRange={}", date_range),
        }
    }

    /// 다운스트림 호출 기술자를 만듭니다.
    ///
    /// `Authorization`은 포워더가 시도마다 붙이므로 여기서는 넣지 않습니다.
    pub fn resolve(
        &self,
        query: &ProxyQuery,
        base_url: &str,
        api_key: &str,
    ) -> AppResult<ResourceDescriptor> {
        self.require_params(query)?;

        let url = format!("{}{}{}", base_url, self.path(), self.upstream_query(query));

        Ok(ResourceDescriptor::new(url)
            .with_header("x-api-key", api_key)
            .with_header("Accept", "application/json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> ProxyQuery {
        ProxyQuery::from_query_string(raw).unwrap()
    }

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(
            ProxyRoute::from_path("/ingestionsLast30Days").unwrap(),
            ProxyRoute::IngestionsLast30Days
        );
        assert_eq!(ProxyRoute::from_path("/bpaReports").unwrap(), ProxyRoute::BpaReports);
        assert_eq!(
            ProxyRoute::from_path("/customerMigrationInfo").unwrap(),
            ProxyRoute::CustomerMigrationInfo
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let err = ProxyRoute::from_path("/unknown").unwrap_err();
        assert!(matches!(err, AppError::NotFound(path) if path == "/unknown"));

        // 경로 비교는 대소문자를 구분
        assert!(ProxyRoute::from_path("/bpareports").is_err());
    }

    #[test]
    fn test_ingestions_descriptor_has_no_query() {
        let descriptor = ProxyRoute::IngestionsLast30Days
            .resolve(&query("dateRange=last%203%20months"), "http://query.test", "key")
            .unwrap();

        assert_eq!(descriptor.url, "http://query.test/ingestionsLast30Days");
        assert_eq!(descriptor.header("x-api-key"), Some("key"));
        assert_eq!(descriptor.header("accept"), Some("application/json"));
        assert_eq!(descriptor.header("authorization"), None);
    }

    #[test]
    fn test_bpa_reports_encodes_org_and_forwards_date_range() {
        let descriptor = ProxyRoute::BpaReports
            .resolve(
                &query("imsOrgId=ABC%40AdobeOrg&dateRange=last%201%20year"),
                "http://query.test",
                "key",
            )
            .unwrap();

        assert_eq!(
            descriptor.url,
            "http://query.test/bpaReports?imsOrgId=ABC%40AdobeOrg&dateRange=last%201%20year"
        );
    }

    #[test]
    fn test_bpa_reports_requires_org() {
        let err = ProxyRoute::BpaReports
            .resolve(&query(""), "http://query.test", "key")
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let blank = ProxyRoute::BpaReports
            .resolve(&query("imsOrgId=%20"), "http://query.test", "key")
            .unwrap_err();
        assert!(matches!(blank, AppError::BadRequest(_)));
    }

    #[test]
    fn test_customer_migration_defaults_date_range() {
        let descriptor = ProxyRoute::CustomerMigrationInfo
            .resolve(&query("dateRange=yesterday"), "http://query.test", "key")
            .unwrap();

        assert_eq!(
            descriptor.url,
            "http://query.test/customerMigrationInfo?dateRange=last%201%20month"
        );
    }

    #[test]
    fn test_count_headers() {
        assert_eq!(
            ProxyRoute::IngestionsLast30Days.count_header(),
            Some("X-Ingestions-Count")
        );
        assert_eq!(ProxyRoute::BpaReports.count_header(), Some("X-BpaReports-Count"));
        assert_eq!(ProxyRoute::CustomerMigrationInfo.count_header(), None);
    }
}
