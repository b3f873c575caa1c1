use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::config::DbConfig;
use crate::error::{Error, Result};

pub mod mysql;
pub mod postgres;
pub mod sqlite;
pub mod traits;

use self::mysql::MysqlDB;
use self::postgres::PostgresDB;
use self::sqlite::SqliteDB;
use self::traits::Database;

pub(crate) const DEFAULT_HOST: &str = "localhost";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    Postgres,
    Mysql,
    Sqlite,
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Driver> {
        return match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Driver::Postgres),
            "mysql" | "mariadb" => Ok(Driver::Mysql),
            "sqlite" | "sqlite3" => Ok(Driver::Sqlite),
            _ => Err(Error::UnknownDriver(s.to_string())),
        };
    }
}

impl Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Driver::Postgres => "postgres",
            Driver::Mysql => "mysql",
            Driver::Sqlite => "sqlite",
        };
        return f.write_str(name);
    }
}

impl Driver {
    pub fn open(&self, config: &DbConfig) -> anyhow::Result<Box<dyn Database>> {
        let db: Box<dyn Database> = match self {
            Driver::Postgres => Box::new(PostgresDB::new(config)?),
            Driver::Mysql => Box::new(MysqlDB::new(config)?),
            Driver::Sqlite => Box::new(SqliteDB::new(config)?),
        };
        return Ok(db);
    }
}

/// Opens a connection with the driver named in `config` and pings it.
///
/// Open and ping failures come back as [`Error::Connection`] carrying the
/// driver error as is. `config` is expected to be validated already.
pub fn connect(config: &DbConfig) -> Result<Box<dyn Database>> {
    let driver = Driver::from_str(&config.driver_name)?;
    let mut db = driver.open(config).map_err(Error::Connection)?;
    db.ping().map_err(Error::Connection)?;
    debug!("Connection to {driver} is alive");
    return Ok(db);
}
