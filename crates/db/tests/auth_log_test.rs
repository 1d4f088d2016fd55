//! Integration tests for the auth log repository and ledger.

mod common;

use std::sync::Arc;

use futures::future::join_all;
use shiftgate_core::auth::Role;
use shiftgate_core::auth_log::{AuthLogLedger, AuthLogStore};
use shiftgate_core::business_day::BusinessCalendar;
use shiftgate_db::AuthLogRepository;

use common::{connect, create_test_employee};

#[tokio::test]
#[ignore = "requires a migrated Postgres at DATABASE_URL"]
async fn test_second_insert_for_same_day_is_ignored() {
    let db = connect().await;
    let employee = create_test_employee(&db, Role::Cashier).await;
    let repo = Arc::new(AuthLogRepository::new(db));
    let ledger = AuthLogLedger::new(repo, BusinessCalendar::default());

    let first = ledger
        .record(employee.id, "S1", "2024-02-01T09:15:00.123456Z")
        .await
        .unwrap();
    let second = ledger
        .record(employee.id, "S1", "2024-02-01T18:00:00Z")
        .await
        .unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(second.logged_for, first.logged_for);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires a migrated Postgres at DATABASE_URL"]
async fn test_concurrent_records_write_one_row() {
    let db = connect().await;
    let employee = create_test_employee(&db, Role::Cashier).await;
    let repo = Arc::new(AuthLogRepository::new(db));
    let calendar = BusinessCalendar::default();
    let ledger = Arc::new(AuthLogLedger::new(repo.clone(), calendar));

    let tasks = (0..10).map(|i| {
        let ledger = ledger.clone();
        tokio::spawn(async move {
            ledger
                .record(employee.id, "S1", &format!("2024-03-01T10:{i:02}:00Z"))
                .await
        })
    });

    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|r| r.created).count(), 1);
    let stored = repo
        .find_entry(employee.id, results[0].business_day)
        .await
        .unwrap()
        .unwrap();
    assert!(results.iter().all(|r| r.logged_for == stored.logged_for));
}
