//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서의 핵심 표현입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템이 관리하는 유일한 리소스입니다. 식별자는 삽입 시점에
/// 호출자가 한 번 부여하며, 이후 어떤 연산도 재생성하지 않습니다.
/// 이 계층은 name/age/email 에 대한 형식 제약을 강제하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// MongoDB 문서 식별자 (삽입 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 나이
    pub age: i32,
    /// 이메일 주소
    pub email: String,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
