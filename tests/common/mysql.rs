use db_fixture::DbConfig;
use mysql::{Conn, Opts, prelude::Queryable};
use testcontainers::{Container, runners::SyncRunner};

use super::testable_database::TestableDatabase;

// The container only has a passwordless root, the fixture needs a full config
const USER: &str = "fixture";
const PASSWORD: &str = "fixture";
const DB_NAME: &str = "test";

pub struct TestMysqlDatabase {
    pub host: String,
    pub port: u16,
    pub connection: Conn,
    container: Container<testcontainers_modules::mysql::Mysql>,
}

impl TestMysqlDatabase {
    pub fn new() -> Self {
        let container = testcontainers_modules::mysql::Mysql::default()
            .start()
            .unwrap();
        let host = container.get_host().unwrap().to_string();
        let port = container.get_host_port_ipv4(3306).unwrap();

        let uri = format!("mysql://root@{host}:{port}/{DB_NAME}");
        let opts = Opts::from_url(&uri).unwrap();
        let mut connection = Conn::new(opts).unwrap();
        connection
            .query_drop(format!(
                "CREATE USER '{USER}'@'%' IDENTIFIED BY '{PASSWORD}'"
            ))
            .unwrap();
        connection
            .query_drop(format!("GRANT ALL PRIVILEGES ON {DB_NAME}.* TO '{USER}'@'%'"))
            .unwrap();

        return Self {
            host,
            port,
            connection,
            container,
        };
    }
}

impl TestableDatabase for TestMysqlDatabase {
    fn config(&self) -> DbConfig {
        return DbConfig::new("mysql", USER, PASSWORD, DB_NAME)
            .with_host(self.host.clone())
            .with_port(self.port);
    }

    fn execute(&mut self, query: &str) {
        self.connection.query_drop(query).unwrap();
    }

    fn count_rows(&mut self, table_name: &str) -> u64 {
        return self
            .connection
            .query_first(format!("SELECT count(1) FROM {table_name}"))
            .unwrap()
            .unwrap();
    }
}
