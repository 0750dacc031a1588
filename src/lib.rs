//! User CRUD 백엔드 서비스
//!
//! MongoDB를 저장소로 사용하는 사용자 리소스 REST API입니다.
//! 단일 `users` 컬렉션에 대한 생성/조회/수정/삭제 연산과
//! 연산별 데드라인 관리를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/users, /users/{id})
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, ID 형식 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Repository    │ ← 데이터 액세스, 연산별 데드라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Outcome mapping
//!
//! 저장소 결과는 두 가지 관찰 가능한 실패 클래스로 정규화됩니다:
//!
//! - **NotFound** → 404 (조회/삭제 대상 없음)
//! - **Database / Timeout** → 5xx (전송 계층 장애, 데드라인 초과)
//!
//! 잘못된 식별자나 본문은 저장소 호출 전에 400으로 거부됩니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
