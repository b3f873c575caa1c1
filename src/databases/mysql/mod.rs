use anyhow::Context;
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};
use tracing::debug;

use crate::config::DbConfig;
use crate::databases::traits::Database;

use super::DEFAULT_HOST;

const DEFAULT_PORT: u16 = 3306;

pub struct MysqlDB {
    connection: Conn,
}

impl MysqlDB {
    pub fn new(config: &DbConfig) -> anyhow::Result<Self> {
        let connection = Self::connect(config)?;
        debug!(
            "Connected to mysql database {} as {}",
            config.db_name, config.user_name
        );
        return Ok(Self { connection });
    }

    fn connect(config: &DbConfig) -> Result<Conn, mysql::Error> {
        let host = config.host.as_deref().unwrap_or(DEFAULT_HOST);
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(host))
            .tcp_port(config.port.unwrap_or(DEFAULT_PORT))
            .user(Some(config.user_name.as_str()))
            .pass(Some(config.password.as_str()))
            .db_name(Some(config.db_name.as_str()));
        return Conn::new(opts);
    }
}

impl Database for MysqlDB {
    fn ping(&mut self) -> anyhow::Result<()> {
        self.connection.ping()?;
        return Ok(());
    }

    fn execute(&mut self, query: &str) -> anyhow::Result<u64> {
        debug!("Executing on mysql: {query}");
        self.connection.query_drop(query)?;
        return Ok(self.connection.affected_rows());
    }

    fn count_rows(&mut self, table: &str) -> anyhow::Result<u64> {
        let count_query = format!("SELECT count(1) FROM {table}");
        return self
            .connection
            .query_first(count_query)?
            .context("Unable to get count of rows for table");
    }
}
