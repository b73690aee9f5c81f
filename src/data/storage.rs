//! SQLite storage layer for reading the operations database.
//!
//! Expected tables (schemas are not inspected, rows are read as-is):
//! - `raw_materials`
//! - `qc_test`

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use super::models::{CellValue, OperationsData, TableSnapshot};
use crate::error::{AppError, Result};

pub const RAW_MATERIALS_TABLE: &str = "raw_materials";
pub const QC_TEST_TABLE: &str = "qc_test";

/// Quote a table name as an SQLite identifier
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Read-only handle to the operations database.
///
/// The connection closes when the `Storage` is dropped.
pub struct Storage {
    path: PathBuf,
    conn: Connection,
}

impl Storage {
    /// Open a read-only connection to the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::DatabaseMissing {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |source| AppError::Open {
                path: path.to_path_buf(),
                source,
            },
        )?;
        debug!(path = %path.display(), "opened operations database");
        Ok(Storage {
            path: path.to_path_buf(),
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `SELECT * FROM <table>` and keep every row in memory
    pub fn load_table(&self, table: &str) -> Result<TableSnapshot> {
        let load_err = |source: rusqlite::Error| AppError::LoadTable {
            table: table.to_string(),
            source,
        };

        let sql = format!("SELECT * FROM {}", quote_identifier(table));
        let mut stmt = self.conn.prepare(&sql).map_err(load_err)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let row_iter = stmt
            .query_map([], |row| {
                (0..column_count)
                    .map(|idx| row.get_ref(idx).map(CellValue::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .map_err(load_err)?;

        let rows = row_iter
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(load_err)?;

        let snapshot = TableSnapshot {
            table: table.to_string(),
            columns,
            rows,
            loaded_at: Utc::now(),
        };
        info!(
            table,
            rows = snapshot.row_count(),
            columns = snapshot.column_count(),
            "loaded table"
        );
        Ok(snapshot)
    }
}

/// Open the database, read both operations tables, and close it again
pub fn load_operations_tables(path: &Path) -> Result<OperationsData> {
    let storage = Storage::open(path)?;
    let raw_materials = storage.load_table(RAW_MATERIALS_TABLE)?;
    let qc_test = storage.load_table(QC_TEST_TABLE)?;
    debug!(path = %storage.path().display(), "closing operations database");
    Ok(OperationsData {
        raw_materials,
        qc_test,
    })
}
