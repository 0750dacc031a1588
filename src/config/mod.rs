//! 애플리케이션 설정 관리 모듈
//!
//! 환경 변수에서 서버/데이터베이스 설정을 읽어옵니다.
//! 이 모듈은 문자열 두 개(접속 URI, 데이터베이스 이름)와 바인드 주소를
//! 제공할 뿐, 값 자체의 유효성은 검증하지 않습니다 — 잘못된 URI는
//! 시작 시점의 연결 단계에서 실패합니다.

use std::env;

/// MongoDB 및 HTTP 서버 설정
///
/// # Environment Variables
///
/// * `MONGODB_URI` - MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// * `DATABASE_NAME` - 데이터베이스 이름 (기본값: "users_db")
/// * `BIND_ADDRESS` - HTTP 서버 바인드 주소 (기본값: "127.0.0.1:8080")
///
/// # Examples
///
/// ```rust,ignore
/// let config = StoreConfig::from_env();
/// let database = Database::connect(&config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB 연결 URI
    pub mongodb_uri: String,
    /// 사용할 논리 데이터베이스 이름
    pub database_name: String,
    /// HTTP 서버 바인드 주소
    pub bind_address: String,
}

impl StoreConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// 설정되지 않은 변수는 로컬 개발용 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "users_db".to_string());

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Self {
            mongodb_uri,
            database_name,
            bind_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // 테스트 프로세스에 해당 변수가 없다는 전제
        unsafe {
            env::remove_var("MONGODB_URI");
            env::remove_var("DATABASE_NAME");
            env::remove_var("BIND_ADDRESS");
        }

        let config = StoreConfig::from_env();

        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "users_db");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }
}
