//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 리포지토리는 저장소 결과를 이
//! 타입으로 정규화해 반환할 뿐, 요청 처리 중 로그를 남기고 프로세스를
//! 종료하는 일이 없습니다 — HTTP 상태 결정은 전적으로 이 타입의
//! `ResponseError` 구현이 담당합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_crud_backend::errors::AppError;
//!
//! async fn get_user(repo: &UserRepository, id: ObjectId) -> Result<User, AppError> {
//!     repo.find_by_id(id).await
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 중 발생할 수 있는 모든 실패를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
///
/// NotFound와 Database/Timeout의 구분은 의도적입니다: 존재하지 않는
/// 레코드는 클라이언트 오류(4xx)이고, 전송 계층 장애는 서버
/// 오류(5xx)입니다. 이 둘을 합치면 장애 상황이 사용자 오류로
/// 잘못 보고됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    Database(String),

    /// 연산 데드라인 초과 (504 Gateway Timeout)
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::Validation("Invalid user ID".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::Database("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_timeout_error_response() {
        let error = AppError::Timeout("find_all".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_not_found_is_distinct_from_database_error() {
        let not_found = AppError::NotFound("User not found".to_string());
        let transport = AppError::Database("connection reset".to_string());

        assert_ne!(not_found.status_code(), transport.status_code());
        assert!(not_found.status_code().is_client_error());
        assert!(transport.status_code().is_server_error());
    }
}
