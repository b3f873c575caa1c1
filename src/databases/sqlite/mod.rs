use anyhow::Context;
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::config::DbConfig;
use crate::databases::traits::Database;

pub struct SqliteDB {
    connection: Connection,
}

impl SqliteDB {
    pub fn new(config: &DbConfig) -> anyhow::Result<Self> {
        let path = config.db_name.replace("sqlite://", "");
        let connection = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        debug!("Opened sqlite database {path}");
        return Ok(SqliteDB { connection });
    }
}

impl Database for SqliteDB {
    fn ping(&mut self) -> anyhow::Result<()> {
        self.connection
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        return Ok(());
    }

    fn execute(&mut self, query: &str) -> anyhow::Result<u64> {
        debug!("Executing on sqlite: {query}");
        let affected = self.connection.execute(query, [])?;
        return Ok(affected.try_into()?);
    }

    fn count_rows(&mut self, table: &str) -> anyhow::Result<u64> {
        let query = format!("SELECT count(1) FROM {table}");
        let count: i64 = self.connection.query_row(&query, [], |row| row.get(0))?;
        return count.try_into().context("Failed to convert i64 to u64");
    }
}
