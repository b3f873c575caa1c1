use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("db conf {} fields have no value", .fields.join(" "))]
    InvalidConfig { fields: Vec<&'static str> },
    #[error("DB_PORT is not a valid port: {value:?}")]
    InvalidPort { value: String },
    #[error("Unknown driver name {0:?}")]
    UnknownDriver(String),
    #[error(transparent)]
    Connection(anyhow::Error),
    #[error(transparent)]
    EnvironmentLoad(#[from] dotenvy::Error),
    #[error("missing table name")]
    MissingTableName,
    #[error("Invalid table name {0:?}")]
    InvalidTableName(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Database connection is not set up")]
    NotConnected,
    #[error(transparent)]
    Execution(anyhow::Error),
}
