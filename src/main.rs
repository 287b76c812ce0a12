//! 쿼리 엣지 프록시 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. IMS 토큰을 프로세스 전역으로
//! 캐싱하면서 고정 라우트 세 개를 쿼리 서비스로 전달합니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use query_edge_proxy::config::{QueryServiceConfig, ServerConfig};
use query_edge_proxy::core::AppState;
use query_edge_proxy::middlewares::cors_headers;
use query_edge_proxy::routes::configure_all_routes;
use query_edge_proxy::routes::proxy_route::ProxyRoute;
use query_edge_proxy::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 쿼리 엣지 프록시 시작중...");

    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| std::io::Error::other(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

    let state = web::Data::new(AppState::from_env(http_client));

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 로깅, CORS 헤더, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    let routes: Vec<(&str, Option<&str>)> = ProxyRoute::ALL
        .iter()
        .map(|route| (route.path(), route.count_header()))
        .collect();
    print_startup_summary(&bind_address, &QueryServiceConfig::base_url(), &routes);

    info!("🌐 서버가 http://{} 에서 실행중입니다 (workers: {})", bind_address, workers);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 이미 설정된 환경 변수로 계속 진행합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            if let Err(e) = dotenv() {
                eprintln!(".env 파일 로드 실패: {}", e);
            }
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=query_edge_proxy::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    info!("Current profile: {}", profile);
    if QueryServiceConfig::api_key().is_err() {
        error!("QUERY_SERVICE_API_KEY가 설정되지 않았습니다. 프록시 요청은 500으로 응답합니다");
    }
}
