//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 (나이 내림차순) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 단건 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/users/{id}` | 사용자 전체 교체 (upsert) | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! ## 책임 분담
//!
//! 식별자 **형식** 검증은 이 계층의 책임입니다: 24자리 16진수가 아닌
//! 경로 세그먼트는 저장소 호출 없이 400으로 거부됩니다. 식별자
//! **존재** 여부 확인은 리포지토리의 책임입니다 (NotFound → 404).
//! 잘못된 JSON 본문은 actix의 `Json` 추출기가 역직렬화 단계에서
//! 400으로 거부합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{CreateUserRequest, StatusResponse, UpdateUserRequest, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

/// 경로 세그먼트를 ObjectId로 파싱합니다.
///
/// 형식이 잘못된 식별자는 저장소로 전달되지 않고 여기서
/// `AppError::Validation`(400)으로 거부됩니다.
fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::Validation(format!("invalid user id format: {id}")))
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// 전체 사용자를 나이 내림차순으로 반환합니다. 빈 컬렉션은
/// 빈 배열(`[]`)입니다.
#[get("")]
pub async fn list_users(repo: web::Data<UserRepository>) -> Result<HttpResponse, AppError> {
    let users = repo.find_all().await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 응답
///
/// * 200 - 사용자 JSON 객체
/// * 400 - 잘못된 식별자 형식
/// * 404 - 해당 식별자의 사용자 없음
#[get("/{user_id}")]
pub async fn get_user(
    repo: web::Data<UserRepository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&user_id)?;

    let user = repo.find_by_id(id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// 식별자는 저장소 쓰기 직전에 여기서 한 번 발급됩니다 —
/// 리포지토리는 식별자를 발급하지 않습니다.
///
/// # 요청 본문
///
/// ```json
/// { "name": "Ann", "age": 40, "email": "ann@x.io" }
/// ```
///
/// # 응답
///
/// * 201 - 발급된 `id`를 포함한 사용자 JSON 객체
/// * 400 - 잘못된 요청 본문
/// * 5xx - 저장소 오류
#[post("")]
pub async fn create_user(
    repo: web::Data<UserRepository>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = payload.into_inner().into_user(ObjectId::new());

    repo.insert(&user).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// 전체 문서 교체 의미를 가집니다. 해당 식별자의 사용자가 없으면
/// 실패 대신 삽입됩니다(upsert) — 같은 본문으로 다시 호출해도
/// 저장 상태는 동일합니다.
///
/// # 응답
///
/// * 200 - `{"result": "success"}`
/// * 400 - 잘못된 식별자 형식 또는 요청 본문
/// * 5xx - 저장소 오류
#[put("/{user_id}")]
pub async fn update_user(
    repo: web::Data<UserRepository>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&user_id)?;

    let user = payload.into_inner().into_user(id);

    repo.upsert(&user).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// * 200 - `{"result": "success"}`
/// * 400 - 잘못된 식별자 형식
/// * 404 - 해당 식별자의 사용자 없음
/// * 5xx - 저장소 오류
#[delete("/{user_id}")]
pub async fn delete_user(
    repo: web::Data<UserRepository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&user_id)?;

    repo.delete(id).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::success()))
}
