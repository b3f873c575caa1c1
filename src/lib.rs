pub mod args;
pub mod config;
pub mod databases;
pub mod error;
pub mod fixture;
pub mod random;
pub mod shared;

pub use config::{ConfigSource, DbConfig};
pub use error::{Error, Result};
pub use fixture::Fixture;
pub use random::{RandomGenerator, random_int, random_string, random_string_from};
