//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Creates the key-value table if it does not exist yet.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(include_str!("../../assets/schema.sql"))
            .db_context("Failed to initialize database schema")
    }
}
