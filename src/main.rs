//! User CRUD 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. MongoDB 연결을 시작
//! 시점에 한 번 수립하고, 리포지토리를 `web::Data`로 모든 워커에
//! 주입합니다. 초기 연결 실패는 유일한 치명적 조건이며 프로세스를
//! 0이 아닌 상태 코드로 종료시킵니다 — 요청 처리 중의 모든 실패는
//! HTTP 에러 응답으로 복구됩니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use user_crud_backend::config::StoreConfig;
use user_crud_backend::db::Database;
use user_crud_backend::repositories::UserRepository;
use user_crud_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    info!("🚀 User CRUD 서비스 시작중...");

    let config = StoreConfig::from_env();

    // 시작 시점의 유일한 치명적 실패 지점: 저장소 연결
    let database = match Database::connect(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("❌ MongoDB 연결 실패: {}", e);
            std::process::exit(1);
        }
    };

    let repository = UserRepository::new(&database);

    start_http_server(config, repository).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다. 리포지토리는
/// 모든 워커가 공유하는 단일 연결 핸들 위에서 동작합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: StoreConfig,
    repository: UserRepository,
) -> std::io::Result<()> {
    let bind_address = config.bind_address.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let repository = web::Data::new(repository);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(repository.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
