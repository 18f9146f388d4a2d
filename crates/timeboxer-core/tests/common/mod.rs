use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;
use timeboxer_core::{
    GenerationError, GenerationRequest, PlanGenerationService, Session, SessionBuilder,
};

/// Creates a temporary directory and a database path inside it.
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    (temp_dir, db_path)
}

/// Opens a session on the database at `db_path`.
pub async fn open_session(db_path: &Path) -> Session {
    SessionBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to open session")
}

/// Provider that is always down.
pub struct DownProvider;

#[async_trait]
impl PlanGenerationService for DownProvider {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Value, GenerationError> {
        Err(GenerationError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        })
    }
}

/// Provider returning a fixed document.
pub struct FixedProvider(pub Value);

#[async_trait]
impl PlanGenerationService for FixedProvider {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Value, GenerationError> {
        Ok(self.0.clone())
    }
}
