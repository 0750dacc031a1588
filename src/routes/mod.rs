//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 선언적으로 등록합니다. 다섯 개의
//! 사용자 CRUD 엔드포인트가 `/users` 스코프 아래에 모이고,
//! 등록되지 않은 경로는 actix의 기본 동작으로 404가 됩니다 —
//! 엔드포인트별 수작업 경로 매칭은 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /users` - 사용자 목록 조회
/// - `GET /users/{id}` - 사용자 단건 조회
/// - `POST /users` - 사용자 생성
/// - `PUT /users/{id}` - 사용자 전체 교체 (upsert)
/// - `DELETE /users/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데
/// 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_crud_backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
