//! 사용자 요청 DTO
//!
//! 생성/수정 요청 본문의 데이터 구조를 정의합니다.
//! 이 계층은 필드 형식 제약을 강제하지 않습니다 — 잘못된 JSON
//! 구조만 역직렬화 단계에서 거부됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// 사용자 생성 요청 DTO
///
/// `POST /users` 의 본문입니다. 식별자는 포함하지 않으며,
/// 서버가 삽입 직전에 부여합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl CreateUserRequest {
    /// 새로 발급한 ObjectId와 함께 엔티티로 변환합니다.
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id: Some(id),
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

/// 사용자 수정 요청 DTO
///
/// `PUT /users/{id}` 의 본문입니다. 전체 문서 교체 의미를 가지므로
/// 모든 필드가 필수입니다. 경로의 식별자와 결합해 엔티티가 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl UpdateUserRequest {
    /// 경로에서 추출한 식별자와 함께 엔티티로 변환합니다.
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id: Some(id),
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserializes_without_id() {
        let body = r#"{"name":"Ann","age":40,"email":"ann@x.io"}"#;
        let request: CreateUserRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.name, "Ann");
        assert_eq!(request.age, 40);
        assert_eq!(request.email, "ann@x.io");
    }

    #[test]
    fn test_into_user_carries_assigned_id() {
        let id = ObjectId::new();
        let request = CreateUserRequest {
            name: "Ann".to_string(),
            age: 40,
            email: "ann@x.io".to_string(),
        };

        let user = request.into_user(id);
        assert_eq!(user.id, Some(id));
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn test_update_request_rejects_missing_field() {
        let body = r#"{"name":"Ann","age":40}"#;
        let result: Result<UpdateUserRequest, _> = serde_json::from_str(body);

        assert!(result.is_err());
    }
}
