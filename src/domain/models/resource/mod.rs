//! 다운스트림 호출 대상 기술자
//!
//! 라우터가 요청마다 생성하며 저장되지 않습니다.

use std::fmt;

/// 한 번의 쿼리 서비스 호출에 필요한 URL과 헤더
///
/// `Authorization` 헤더는 포함하지 않습니다. 포워더가 시도마다 현재 토큰으로 붙입니다.
#[derive(Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl ResourceDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// 이름이 일치하는 첫 번째 헤더 값을 반환합니다 (대소문자 무시).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// x-api-key 값이 로그에 남지 않도록 헤더 이름만 출력
impl fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("ResourceDescriptor")
            .field("url", &self.url)
            .field("headers", &names)
            .finish()
    }
}
