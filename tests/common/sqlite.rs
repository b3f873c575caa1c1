use std::path::PathBuf;

use db_fixture::DbConfig;
use rusqlite::{Connection, OpenFlags};
use tempfile::TempDir;

use super::{gen_database_name, testable_database::TestableDatabase};

pub struct TestSqliteDatabase {
    pub path: PathBuf,
    pub conn: Connection,
    tmp_dir: TempDir,
}

impl TestSqliteDatabase {
    pub fn new() -> Self {
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join(gen_database_name());
        let conn = Connection::open_with_flags(
            path.clone(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )
        .expect("Failed to create test sqlite database");

        return Self {
            conn,
            path,
            tmp_dir,
        };
    }
}

impl TestableDatabase for TestSqliteDatabase {
    fn config(&self) -> DbConfig {
        return DbConfig::new("sqlite", "fixture", "fixture", self.path.to_str().unwrap());
    }

    fn execute(&mut self, query: &str) {
        self.conn.execute(query, []).unwrap();
    }

    fn count_rows(&mut self, table_name: &str) -> u64 {
        let query = format!("SELECT count(1) FROM {table_name}");
        return self
            .conn
            .query_row(&query, [], |row| row.get::<_, i64>(0))
            .unwrap() as u64;
    }
}
