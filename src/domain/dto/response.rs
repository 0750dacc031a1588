//! 사용자 응답 DTO
//!
//! 엔티티를 와이어 표현으로 변환합니다. BSON ObjectId의 확장 JSON
//! 표현(`$oid`)이 클라이언트에 노출되지 않도록 식별자는 문자열로
//! 변환됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 24자리 소문자 16진수 식별자
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            name, age, email, ..
        } = user;

        Self {
            id,
            name,
            age,
            email,
        }
    }
}

/// 상태 마커 응답 DTO
///
/// 수정/삭제 성공 시 반환되는 최소 응답입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub result: String,
}

impl StatusResponse {
    /// `{"result": "success"}` 마커를 생성합니다.
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_wire_field_names() {
        let id = ObjectId::new();
        let user = User {
            id: Some(id),
            name: "Ann".to_string(),
            age: 40,
            email: "ann@x.io".to_string(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["age"], 40);
        assert_eq!(json["email"], "ann@x.io");
    }

    #[test]
    fn test_id_rendered_as_lowercase_hex() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Ann".to_string(),
            age: 40,
            email: "ann@x.io".to_string(),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id.len(), 24);
        assert_eq!(response.id, response.id.to_lowercase());
    }

    #[test]
    fn test_status_marker() {
        let json = serde_json::to_value(StatusResponse::success()).unwrap();
        assert_eq!(json["result"], "success");
    }
}
