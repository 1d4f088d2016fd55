//! Database seeder for Shiftgate development and testing.
//!
//! Seeds a manager and a cashier, a closing report for store `S1` and an
//! initial cash declaration for the cashier on the following day.
//! Running it twice is harmless.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Duration, NaiveTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use shiftgate_core::auth::{Employee, EmployeeDirectory, Role, hash_password};
use shiftgate_db::entities::closing_reports;
use shiftgate_db::repositories::{CreateEmployeeInput, EmployeeRepository, ReportRepository};

/// Store the seeded data belongs to.
const TEST_STORE: &str = "S1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = shiftgate_db::connect(&database_url).await?;

    println!("Seeding employees...");
    seed_employee(&db, "manager", "0000", "Grace", "Hopper", Role::Manager).await?;
    let cashier = seed_employee(&db, "cashier", "1234", "Ada", "Lovelace", Role::Cashier).await?;

    println!("Seeding closing report and cash declaration...");
    seed_reports(&db, &cashier).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Creates an employee unless the username is taken.
async fn seed_employee(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    role: Role,
) -> anyhow::Result<Employee> {
    let repo = EmployeeRepository::new(db.clone());

    if let Some(existing) = repo.find_by_username(username).await? {
        println!("  Employee {username} already exists, skipping...");
        return Ok(existing);
    }

    let employee = repo
        .create(CreateEmployeeInput {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
        })
        .await?;

    println!("  Created {role} {username}");
    Ok(employee)
}

/// Closes yesterday for the store and declares the cashier's cash for today.
async fn seed_reports(db: &DatabaseConnection, cashier: &Employee) -> anyhow::Result<()> {
    let existing = closing_reports::Entity::find()
        .filter(closing_reports::Column::StoreCode.eq(TEST_STORE))
        .count(db)
        .await?;
    if existing > 0 {
        println!("  Store {TEST_STORE} already has closing reports, skipping...");
        return Ok(());
    }

    let repo = ReportRepository::new(db.clone());
    let yesterday = (Utc::now() - Duration::days(1))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let report = repo
        .create_closing_report(
            TEST_STORE,
            yesterday,
            serde_json::json!({ "total": "0.00" }),
        )
        .await?;
    let closed = report.business_date.date_naive();
    println!("  Closed business day {closed}");

    let declared_at = yesterday + Duration::days(1) + Duration::hours(8);
    repo.create_initial_declaration(
        cashier.id,
        TEST_STORE,
        declared_at,
        serde_json::json!({ "amount": "150.00" }),
    )
    .await?;
    println!("  Declared initial cash for {}", cashier.username);

    Ok(())
}
