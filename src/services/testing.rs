//! 테스트 전용 대역(fake) 구현
//!
//! 네트워크 경계(trait)마다 호출 횟수를 기록하는 구현을 제공합니다.
//! reqwest 구현의 요청 형태는 루프백 `StubServer`로 확인합니다.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::dto::audit::AuditEvent;
use crate::domain::dto::tokens::ImsTokenResponse;
use crate::domain::models::resource::ResourceDescriptor;
use crate::domain::models::token::{AccessToken, TokenCredentials};
use crate::errors::errors::{AppError, AppResult};
use crate::services::audit::AuditNotifier;
use crate::services::auth::{Clock, TokenExchanger};
use crate::services::forwarding::{QueryTransport, UpstreamResponse};

pub fn test_credentials() -> TokenCredentials {
    TokenCredentials::new(
        "client-id".to_string(),
        "client-secret".to_string(),
        "auth-code".to_string(),
        "http://ims.test/ims/token/v1".to_string(),
    )
}

/// 수동으로 움직이는 시계
pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// 호출마다 `token-1`, `token-2`, ... 를 발급하는 교환기
pub struct CountingExchanger {
    calls: AtomicUsize,
    expires_in: i64,
    reject_with: Option<u16>,
}

impl CountingExchanger {
    pub fn new(expires_in: i64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            expires_in,
            reject_with: None,
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            expires_in: 3600,
            reject_with: Some(status),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchanger for CountingExchanger {
    async fn exchange(&self, _credentials: &TokenCredentials) -> AppResult<ImsTokenResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        // 실제 네트워크 호출처럼 양보 지점을 둔다
        tokio::task::yield_now().await;

        if let Some(status) = self.reject_with {
            return Err(AppError::AuthExchangeError { status });
        }

        Ok(ImsTokenResponse {
            access_token: format!("token-{}", call),
            expires_in: self.expires_in,
            token_type: Some("bearer".to_string()),
        })
    }
}

/// 미리 정한 상태 코드 순서대로 응답하는 쿼리 서비스 대역
///
/// 스크립트가 소진되면 마지막 응답을 반복합니다.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<UpstreamResponse>>,
    last: Mutex<Option<UpstreamResponse>>,
    calls: AtomicUsize,
    seen_tokens: Mutex<Vec<String>>,
    seen_descriptors: Mutex<Vec<ResourceDescriptor>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<(u16, &str)>) -> Self {
        let script = script
            .into_iter()
            .map(|(status, body)| UpstreamResponse {
                status,
                body: body.to_string(),
            })
            .collect();

        Self {
            script: Mutex::new(script),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            seen_tokens: Mutex::new(Vec::new()),
            seen_descriptors: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }

    pub fn seen_descriptors(&self) -> Vec<ResourceDescriptor> {
        self.seen_descriptors.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryTransport for ScriptedTransport {
    async fn send(
        &self,
        descriptor: &ResourceDescriptor,
        token: &AccessToken,
    ) -> AppResult<UpstreamResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_tokens.lock().unwrap().push(token.value().to_string());
        self.seen_descriptors.lock().unwrap().push(descriptor.clone());
        tokio::task::yield_now().await;

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(response) => {
                *last = Some(response.clone());
                Ok(response)
            }
            None => last
                .clone()
                .ok_or_else(|| AppError::ExternalServiceError("empty script".to_string())),
        }
    }
}

/// 전송된 감사 이벤트를 기록하는 알림기
pub struct RecordingNotifier {
    events: Mutex<Vec<(String, AuditEvent)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn events(&self) -> Vec<(String, AuditEvent)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditNotifier for RecordingNotifier {
    async fn notify(&self, webhook_url: &str, event: &AuditEvent) -> AppResult<()> {
        self.events
            .lock()
            .unwrap()
            .push((webhook_url.to_string(), event.clone()));

        if self.fail {
            return Err(AppError::ExternalServiceError("webhook unreachable".to_string()));
        }
        Ok(())
    }
}

/// 프록시 설정을 타지 않는 테스트용 HTTP 클라이언트
pub fn loopback_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// `StubServer`가 받은 요청 한 건
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .count()
    }
}

/// 127.0.0.1 임의 포트에서 고정 응답을 돌려주고 받은 요청을 기록하는 서버
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl StubServer {
    pub fn start(status: u16, body: &'static str) -> Self {
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let server = HttpServer::new(move || {
            let recorded = Arc::clone(&recorded);
            App::new().default_service(web::to(move |req: HttpRequest, payload: web::Bytes| {
                let recorded = Arc::clone(&recorded);
                async move {
                    let headers = req
                        .headers()
                        .iter()
                        .map(|(name, value)| {
                            (
                                name.as_str().to_string(),
                                value.to_str().unwrap_or_default().to_string(),
                            )
                        })
                        .collect();

                    recorded.lock().unwrap().push(RecordedRequest {
                        method: req.method().to_string(),
                        uri: req.uri().to_string(),
                        headers,
                        body: String::from_utf8_lossy(&payload).into_owned(),
                    });

                    HttpResponse::build(StatusCode::from_u16(status).unwrap()).body(body)
                }
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let base_url = format!("http://{}", server.addrs()[0]);
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url,
            requests,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
