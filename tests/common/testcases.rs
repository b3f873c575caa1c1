use db_fixture::{Error, Fixture};
use pretty_assertions::assert_eq;

use super::testable_database::TestableDatabase;

fn create_test_tables(db: &mut impl TestableDatabase) {
    db.create_test_table("test");
    db.create_test_table("test1");
    db.fill_test_table("test", 10);
    db.fill_test_table("test1", 5);
}

pub fn delete_tables_from(mut db: impl TestableDatabase) {
    create_test_tables(&mut db);
    let mut fixture = Fixture::bootstrap(db.config()).unwrap();

    fixture.delete_tables_from(&["test", "test1"]).unwrap();

    assert_eq!(db.count_rows("test"), 0);
    assert_eq!(db.count_rows("test1"), 0);
    assert_eq!(fixture.count_rows("test").unwrap(), 0);
}

pub fn delete_registered_tables(mut db: impl TestableDatabase) {
    create_test_tables(&mut db);
    let mut fixture = Fixture::bootstrap(db.config())
        .unwrap()
        .with_tables(["test1"]);

    fixture.delete_tables().unwrap();

    assert_eq!(db.count_rows("test"), 10);
    assert_eq!(db.count_rows("test1"), 0);
}

pub fn delete_from_returns_deleted_rows(mut db: impl TestableDatabase) {
    create_test_tables(&mut db);
    let mut fixture = Fixture::bootstrap(db.config()).unwrap();

    assert_eq!(fixture.delete_from("test").unwrap(), 10);
    assert_eq!(db.count_rows("test1"), 5);
}

pub fn delete_from_twice(mut db: impl TestableDatabase) {
    db.create_test_table("test");
    let mut fixture = Fixture::bootstrap(db.config()).unwrap();

    assert_eq!(fixture.delete_from("test").unwrap(), 0);
    assert_eq!(fixture.delete_from("test").unwrap(), 0);
}

pub fn table_not_found(mut db: impl TestableDatabase) {
    create_test_tables(&mut db);
    let mut fixture = Fixture::bootstrap(db.config()).unwrap();

    let err = fixture
        .delete_tables_from(&["test", "not_existing_table", "test1"])
        .unwrap_err();

    assert!(matches!(err, Error::Execution(_)), "Unexpected error {err:?}");
    assert_eq!(db.count_rows("test"), 0);
    // Tables after the failing one are not touched
    assert_eq!(db.count_rows("test1"), 5);
}

pub fn seed_through_fixture(mut db: impl TestableDatabase) {
    db.create_test_table("test");
    let mut fixture = Fixture::bootstrap(db.config()).unwrap();

    let name = db_fixture::random_string(12);
    let inserted = fixture
        .execute(&format!("INSERT INTO test VALUES (1, '{name}')"))
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(db.count_rows("test"), 1);
    fixture.delete_tables_from(&["test"]).unwrap();
    assert_eq!(db.count_rows("test"), 0);
}
