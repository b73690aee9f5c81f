//! Fatal startup errors.
//!
//! Every variant ends the process; nothing is retried.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("operations database not found: {path:?}")]
    DatabaseMissing { path: PathBuf },

    #[error("failed to open database {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to load table `{table}`")]
    LoadTable {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to bind HTTP server to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}

impl AppError {
    /// True for failures reading the operations database
    pub fn is_data_access(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseMissing { .. } | AppError::Open { .. } | AppError::LoadTable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
