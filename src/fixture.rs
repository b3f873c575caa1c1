use tracing::{debug, info};

use crate::config::ConfigSource;
use crate::databases::{self, traits::Database};
use crate::error::{Error, Result};

/// An open test database plus the tables it is expected to clean.
pub struct Fixture {
    db: Box<dyn Database>,
    tables: Vec<String>,
}

impl Fixture {
    /// Resolves the configuration, validates it, then connects and pings.
    pub fn bootstrap(source: impl Into<ConfigSource>) -> Result<Self> {
        let config = source.into().resolve()?;
        config.validate()?;
        let db = databases::connect(&config)?;
        info!(
            "Test database {} is ready ({})",
            config.db_name, config.driver_name
        );
        return Ok(Self::from_database(db));
    }

    pub fn from_database(db: Box<dyn Database>) -> Self {
        return Self {
            db,
            tables: Vec::new(),
        };
    }

    pub fn with_tables<S: Into<String>>(mut self, tables: impl IntoIterator<Item = S>) -> Self {
        self.set_tables(tables);
        return self;
    }

    pub fn set_tables<S: Into<String>>(&mut self, tables: impl IntoIterator<Item = S>) {
        self.tables = tables.into_iter().map(Into::into).collect();
    }

    pub fn tables(&self) -> &[String] {
        return &self.tables;
    }

    pub fn database(&mut self) -> &mut dyn Database {
        return self.db.as_mut();
    }

    /// Deletes every row of `table` and returns the number of deleted rows.
    pub fn delete_from(&mut self, table: &str) -> Result<u64> {
        return delete_from(self.db.as_mut(), table);
    }

    /// Cleans `tables` in order, stopping at the first failure.
    ///
    /// Tables after the failed one are left untouched. An empty slice is a no-op.
    pub fn delete_tables_from<S: AsRef<str>>(&mut self, tables: &[S]) -> Result<()> {
        return delete_tables_from(self.db.as_mut(), tables);
    }

    /// Cleans the tables set with [`Fixture::set_tables`].
    pub fn delete_tables(&mut self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(Error::MissingTableName);
        }
        return delete_tables_from(self.db.as_mut(), self.tables.as_slice());
    }

    pub fn execute(&mut self, query: &str) -> Result<u64> {
        return self.db.execute(query).map_err(Error::Execution);
    }

    pub fn count_rows(&mut self, table: &str) -> Result<u64> {
        check_table_name(table)?;
        return self.db.count_rows(table).map_err(Error::Execution);
    }
}

fn delete_from(db: &mut dyn Database, table: &str) -> Result<u64> {
    check_table_name(table)?;
    let deleted = db
        .execute(&format!("DELETE FROM {table}"))
        .map_err(Error::Execution)?;
    info!("Deleted {deleted} rows from {table}");
    return Ok(deleted);
}

fn delete_tables_from<S: AsRef<str>>(db: &mut dyn Database, tables: &[S]) -> Result<()> {
    for table in tables {
        delete_from(db, table.as_ref())?;
    }
    debug!("Cleaned {} tables", tables.len());
    return Ok(());
}

/// Table names end up in SQL text, so only plain identifiers are allowed,
/// optionally schema qualified (`schema.table`).
pub fn check_table_name(table: &str) -> Result<()> {
    let is_ident = |part: &str| {
        let mut chars = part.chars();
        return match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            }
            _ => false,
        };
    };
    if !table.split('.').all(is_ident) {
        return Err(Error::InvalidTableName(table.to_string()));
    }
    return Ok(());
}
