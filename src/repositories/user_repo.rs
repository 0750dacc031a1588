//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 고정된 `users` 컬렉션에 대해 네 가지 CRUD 연산을 실행하며,
//! 각 연산은 명시적 데드라인 아래에서 수행됩니다.
//!
//! ## 결과 정규화
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환하며, 저장소 결과를
//! 다음과 같이 정규화합니다:
//!
//! - **NotFound**: 일치하는 문서 없음 — 정상적이고 예상 가능한 결과로,
//!   HTTP 경계에서 4xx로 매핑됩니다
//! - **Database**: 드라이버/전송 계층 오류 — 5xx로 매핑됩니다
//! - **Timeout**: 데드라인 초과 — 진행 중인 호출을 버리고 운영 오류로
//!   보고합니다
//!
//! ## 데드라인 정책
//!
//! 각 데이터 연산은 20초 예산 안에서 완료되어야 합니다. 예산을
//! 초과하면 드라이버 future가 드롭되어 진행 중인 네트워크 호출이
//! 중단되고, 호출자는 `AppError::Timeout`을 받습니다. 무기한 대기는
//! 없습니다. 재시도 정책도 없습니다 — 실패한 시도는 즉시 호출자에게
//! 전달됩니다.

use std::future::Future;
use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};
use tokio::time;

use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};

/// 사용자 컬렉션 이름
const COLLECTION: &str = "users";

/// 연산별 데드라인
const OP_DEADLINE: Duration = Duration::from_secs(20);

/// `find_all`의 고정 정렬 명세
///
/// 나이 내림차순은 의도된 고정 설계이며 설정으로 바꿀 수 없습니다.
fn age_descending_sort() -> Document {
    doc! { "age": -1 }
}

/// 드라이버 호출에 데드라인을 적용합니다.
///
/// 데드라인 초과 시 내부 future가 드롭되어 진행 중인 연산이
/// 중단되고, `AppError::Timeout`이 반환됩니다.
async fn with_deadline<F, T>(op_name: &str, deadline: Duration, op: F) -> AppResult<T>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match time::timeout(deadline, op).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => Err(AppError::Timeout(op_name.to_string())),
    }
}

/// 사용자 데이터 액세스 리포지토리
///
/// 프로세스 시작 시점에 한 번 생성되어 `web::Data`로 핸들러에
/// 주입됩니다. `Clone`은 드라이버 연결 풀을 공유하므로 저렴하며,
/// 동시 요청 간에 공유해도 안전합니다. 리포지토리 자체는 요청 간
/// 상태를 가지지 않습니다 (캐싱 없음).
#[derive(Clone)]
pub struct UserRepository {
    /// `users` 컬렉션 핸들
    collection: Collection<User>,
}

impl UserRepository {
    /// 주어진 데이터베이스 연결 위에 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// 전체 사용자 목록 조회
    ///
    /// 컬렉션의 모든 문서를 나이 내림차순으로 반환합니다. 이 정렬은
    /// 고정된 설계이며 설정으로 바꿀 수 없습니다. 빈 컬렉션은 빈
    /// 벡터를 반환합니다 — 에러가 아닙니다.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let collection = self.collection.clone();

        with_deadline("find_all", OP_DEADLINE, async move {
            let cursor = collection
                .find(doc! {})
                .sort(age_descending_sort())
                .await?;
            cursor.try_collect::<Vec<User>>().await
        })
        .await
    }

    /// ID로 사용자 조회
    ///
    /// 일치하는 문서가 없는 경우는 `AppError::NotFound`로, 그 외의
    /// 모든 드라이버 오류는 `AppError::Database`로 구분해 반환합니다.
    /// 식별자 형식 검증은 호출자(라우터)의 책임입니다 — 이 메서드는
    /// 이미 파싱된 ObjectId만 받습니다.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<User> {
        let collection = self.collection.clone();

        let found = with_deadline("find_by_id", OP_DEADLINE, async move {
            collection.find_one(doc! { "_id": id }).await
        })
        .await?;

        found.ok_or_else(|| AppError::NotFound(format!("no user with id {}", id.to_hex())))
    }

    /// 새 사용자 삽입
    ///
    /// 호출자가 이미 식별자를 부여한 상태여야 합니다 — 리포지토리는
    /// 식별자를 발급하지 않습니다. 중복 식별자나 전송 오류는
    /// `AppError::Database`로 보고됩니다.
    pub async fn insert(&self, user: &User) -> AppResult<()> {
        let collection = self.collection.clone();

        with_deadline("insert", OP_DEADLINE, async move {
            collection.insert_one(user).await.map(|_| ())
        })
        .await
    }

    /// 사용자 전체 교체 (upsert)
    ///
    /// 주어진 식별자와 일치하는 문서를 전체 교체합니다. 일치하는
    /// 문서가 없으면 실패하는 대신 **삽입합니다** — 선언된 설계
    /// 의도이며, 같은 본문으로 반복 호출해도 저장 상태는 동일합니다.
    pub async fn upsert(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::Validation("user has no assigned id".to_string()))?;

        let collection = self.collection.clone();

        with_deadline("upsert", OP_DEADLINE, async move {
            collection
                .replace_one(doc! { "_id": id }, user)
                .upsert(true)
                .await
                .map(|_| ())
        })
        .await
    }

    /// 사용자 삭제
    ///
    /// 삭제된 문서가 없으면 `find_by_id`와 동일하게
    /// `AppError::NotFound`를 반환합니다.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let collection = self.collection.clone();

        let result = with_deadline("delete", OP_DEADLINE, async move {
            collection.delete_one(doc! { "_id": id }).await
        })
        .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "no user with id {}",
                id.to_hex()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sort_is_age_descending() {
        // 나이 10, 30, 20 → 30, 20, 10 순서를 만드는 정렬 명세
        assert_eq!(age_descending_sort(), doc! { "age": -1 });
    }

    #[tokio::test]
    async fn test_deadline_elapsed_surfaces_timeout() {
        let result: AppResult<()> = with_deadline(
            "pending_op",
            Duration::from_millis(10),
            std::future::pending::<Result<(), mongodb::error::Error>>(),
        )
        .await;

        match result {
            Err(AppError::Timeout(op)) => assert_eq!(op, "pending_op"),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deadline_passes_through_success() {
        let result =
            with_deadline("ok_op", OP_DEADLINE, async { Ok::<_, mongodb::error::Error>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_deadline_passes_through_driver_error() {
        let result: AppResult<()> = with_deadline("err_op", OP_DEADLINE, async {
            Err(mongodb::error::Error::custom("boom"))
        })
        .await;

        match result {
            Err(AppError::Database(_)) => {}
            other => panic!("expected Database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upsert_rejects_unassigned_id_before_store_call() {
        // 클라이언트는 게으르게 연결되므로 실제 mongod 없이도
        // 드라이버 호출 이전의 검증 경로를 테스트할 수 있다
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let repo = UserRepository {
            collection: client.database("test").collection(COLLECTION),
        };

        let user = User {
            id: None,
            name: "Ann".to_string(),
            age: 40,
            email: "ann@x.io".to_string(),
        };

        match repo.upsert(&user).await {
            Err(AppError::Validation(_)) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
