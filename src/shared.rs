//! Process-wide fixture for suites that bootstrap once and clean from many tests.
//!
//! Both the connection and the table list sit behind mutexes, so calls from
//! parallel tests are serialized. Prefer owning a [`Fixture`] per test when the
//! suite can hand it around.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::ConfigSource;
use crate::error::{Error, Result};
use crate::fixture::Fixture;

static FIXTURE: Mutex<Option<Fixture>> = Mutex::new(None);
static TABLES: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Poisoned only by a panicking test, the guarded state is still consistent
    return mutex.lock().unwrap_or_else(PoisonError::into_inner);
}

/// Bootstraps a [`Fixture`] and publishes it, replacing the previous one.
///
/// On failure the previously published fixture is kept.
pub fn bootstrap(source: impl Into<ConfigSource>) -> Result<()> {
    let fixture = Fixture::bootstrap(source)?;
    if lock(&FIXTURE).replace(fixture).is_some() {
        debug!("Replaced shared test database connection");
    }
    return Ok(());
}

pub fn is_connected() -> bool {
    return lock(&FIXTURE).is_some();
}

/// Drops the shared connection, if any.
pub fn disconnect() {
    lock(&FIXTURE).take();
}

pub fn set_tables<S: Into<String>>(tables: impl IntoIterator<Item = S>) {
    *lock(&TABLES) = tables.into_iter().map(Into::into).collect();
}

pub fn tables() -> Vec<String> {
    return lock(&TABLES).clone();
}

/// Runs `f` with the shared fixture, e.g. to seed data with [`Fixture::execute`].
pub fn with_fixture<T>(f: impl FnOnce(&mut Fixture) -> Result<T>) -> Result<T> {
    let mut guard = lock(&FIXTURE);
    let fixture = guard.as_mut().ok_or(Error::NotConnected)?;
    return f(fixture);
}

pub fn delete_from(table: &str) -> Result<u64> {
    return with_fixture(|fixture| fixture.delete_from(table));
}

pub fn delete_tables_from<S: AsRef<str>>(tables: &[S]) -> Result<()> {
    return with_fixture(|fixture| fixture.delete_tables_from(tables));
}

/// Cleans the tables registered with [`set_tables`].
///
/// Fails with [`Error::MissingTableName`] before touching the connection when
/// no tables are registered.
pub fn delete_tables() -> Result<()> {
    let tables = tables();
    if tables.is_empty() {
        return Err(Error::MissingTableName);
    }
    return with_fixture(|fixture| fixture.delete_tables_from(tables.as_slice()));
}
