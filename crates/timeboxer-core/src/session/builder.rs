//! Builder for opening database-backed sessions.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Session;
use crate::{
    db::Database,
    error::{Result, TimeboxError},
};

/// Builder for creating and configuring [`Session`] instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/timeboxer/timeboxer.db` or
    /// `~/.local/share/timeboxer/timeboxer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and restores the saved plan.
    ///
    /// # Errors
    ///
    /// Returns `TimeboxError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `TimeboxError::Database` if database initialization fails
    pub async fn build(self) -> Result<Session> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TimeboxError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening session database at {}", db_path.display());
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok::<_, TimeboxError>(Session::open(db))
        })
        .await
        .map_err(|e| TimeboxError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("timeboxer")
            .place_data_file("timeboxer.db")
            .map_err(|e| TimeboxError::XdgDirectory(e.to_string()))
    }
}
