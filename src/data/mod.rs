//! Data layer for reading the operations SQLite database.

mod models;
mod storage;

pub use models::OperationsData;
pub use storage::load_operations_tables;

#[cfg(test)]
pub(crate) use storage::tests as fixtures;
