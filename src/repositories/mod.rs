//! 데이터 액세스 계층
//!
//! 저장소 결과를 NotFound / 전송 오류의 두 실패 클래스로 정규화하고,
//! 모든 데이터 연산에 고정 데드라인을 적용하는 리포지토리들을
//! 제공합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
