//! 와이어 DTO 모듈
//!
//! HTTP 요청/응답 본문의 JSON 표현을 정의합니다.
//! 요청 본문에는 식별자가 없고(서버가 부여), 응답에서는 식별자가
//! 항상 24자리 16진수 문자열로 직렬화됩니다.

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::{StatusResponse, UserResponse};
