#![cfg(test)]

use rstest::fixture;

use crate::infra::config::{AppConfig, ApplicationConfig, DatabaseConfig, LoggerConfig};
use crate::infra::init_app_state;
use crate::infra::state::AppState;

#[fixture]
pub fn test_config() -> AppConfig {
    AppConfig {
        db: DatabaseConfig {
            // One connection keeps a single private in-memory database per test.
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        logger: LoggerConfig {
            log_path: "./test.log".to_string(),
        },
        application: ApplicationConfig {
            allow_origins: vec!["*".to_string()],
            address: "127.0.0.1:3000".to_string(),
        },
    }
}

#[fixture]
pub async fn init_test_app_state(test_config: AppConfig) -> anyhow::Result<AppState> {
    init_app_state(&test_config).await
}
