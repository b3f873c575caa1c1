use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, info};

use crate::config::ConfigSource;
use crate::fixture::Fixture;
use crate::random::{DEFAULT_ALPHABET, random_int, random_string_from};

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct Args {
    /// Path to the env file with DB_DRIVER_NAME, DB_USER, DB_PASS, DB_NAME
    /// and optional DB_HOST, DB_PORT
    #[arg(long, short, default_value = ".env")]
    pub env_file: PathBuf,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Connect to the configured database and check it is alive
    Check,

    /// Delete all rows from the given tables, in order
    Clean {
        /// List of tables
        #[arg(long, short, required = true)]
        table: Vec<String>,
    },

    /// Print a random string
    RandomString {
        #[arg(long, short)]
        length: usize,

        /// Characters to draw from
        #[arg(long, short, default_value = DEFAULT_ALPHABET)]
        alphabet: String,
    },

    /// Print a random integer in [0, limit)
    RandomInt {
        #[arg(long)]
        limit: u64,
    },
}

impl Args {
    fn bootstrap(&self) -> crate::Result<Fixture> {
        return Fixture::bootstrap(ConfigSource::EnvFile(self.env_file.clone()));
    }
}

pub fn run(args: Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Check => {
            args.bootstrap()?;
            info!("Database from {} is reachable", args.env_file.display());
        }
        Command::Clean { table } => {
            let mut fixture = args.bootstrap()?;
            fixture.delete_tables_from(table.as_slice())?;
            info!("Cleaned {} tables", table.len());
        }
        Command::RandomString { length, alphabet } => {
            println!("{}", random_string_from(*length, alphabet)?);
        }
        Command::RandomInt { limit } => {
            println!("{}", random_int(*limit)?);
        }
    }
    return Ok(());
}
