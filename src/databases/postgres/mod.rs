use anyhow::Context;
use postgres::{Client, NoTls};
use tracing::debug;

use crate::config::DbConfig;
use crate::databases::traits::Database;

use super::DEFAULT_HOST;

pub struct PostgresDB {
    client: Client,
}

impl PostgresDB {
    pub fn new(config: &DbConfig) -> anyhow::Result<Self> {
        let client = client_config(config).connect(NoTls)?;
        debug!(
            "Connected to postgres database {} as {}",
            config.db_name, config.user_name
        );
        return Ok(Self { client });
    }
}

/// Credentials go through the setters untouched, so spaces or `key=` text in
/// a password can not change other connection parameters.
fn client_config(config: &DbConfig) -> postgres::Config {
    let mut pg_config = postgres::Config::new();
    pg_config
        .user(&config.user_name)
        .password(&config.password)
        .dbname(&config.db_name)
        .host(config.host.as_deref().unwrap_or(DEFAULT_HOST));
    if let Some(port) = config.port {
        pg_config.port(port);
    }
    return pg_config;
}

impl Database for PostgresDB {
    fn ping(&mut self) -> anyhow::Result<()> {
        self.client.batch_execute("SELECT 1")?;
        return Ok(());
    }

    fn execute(&mut self, query: &str) -> anyhow::Result<u64> {
        debug!("Executing on postgres: {query}");
        return Ok(self.client.execute(query, &[])?);
    }

    fn count_rows(&mut self, table: &str) -> anyhow::Result<u64> {
        let count_query = format!("SELECT count(1) FROM {table}");
        return self
            .client
            .query_one(&count_query, &[])?
            .get::<_, i64>(0)
            .try_into()
            .context("Failed to convert i64 to u64");
    }
}
