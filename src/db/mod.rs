//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 프로세스 시작 시점에 단 한 번 수립되며, 이후 모든 요청이
//! 같은 핸들을 공유합니다. 연결 실패는 복구 불가능한 시작 오류로
//! 취급됩니다 — 요청 처리 중에는 이 모듈이 프로세스를 종료시키는
//! 일이 없습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use user_crud_backend::config::StoreConfig;
//! use user_crud_backend::db::Database;
//!
//! let config = StoreConfig::from_env();
//! let database = Database::connect(&config).await?;
//! let users = database.collection::<User>("users");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::StoreConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 선택된 논리 데이터베이스를 관리하며,
/// 리포지토리 계층에 컬렉션 핸들을 제공합니다.
/// `Clone`은 내부 연결 풀을 공유하므로 저렴합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 초기화하고, `ping` 커맨드로
    /// 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// URI 파싱 실패, 엔드포인트 도달 불가, 인증 실패 시
    /// 드라이버 에러를 반환합니다. 호출자(main)는 이를 치명적
    /// 시작 오류로 처리해야 합니다.
    pub async fn connect(config: &StoreConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("user_crud_backend".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 이미 구성된 클라이언트를 감싸 Database를 생성합니다.
    ///
    /// 연결 검증(ping)을 수행하지 않습니다. 게으르게 연결되는
    /// 클라이언트를 주입해야 하는 테스트에서 사용합니다.
    pub fn from_client(client: Client, database_name: &str) -> Self {
        Self {
            client,
            database_name: database_name.to_string(),
        }
    }

    /// 지정된 이름의 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.client.database(&self.database_name).collection(name)
    }
}
