/// Minimal surface the fixture needs from a driver connection.
#[cfg_attr(test, mockall::automock)]
pub trait Database: Send {
    /// Liveness check, run once right after the connection is opened.
    fn ping(&mut self) -> anyhow::Result<()>;

    /// Runs a statement without parameters and returns the number of affected rows.
    fn execute(&mut self, query: &str) -> anyhow::Result<u64>;

    fn count_rows(&mut self, table: &str) -> anyhow::Result<u64>;
}
