//! Database seeder for Gigpay development and testing.
//!
//! Seeds a small marketplace: a handful of clients and contractors, the
//! contracts between them, and a mix of paid and unpaid jobs. IDs are
//! fixed so repeated runs are idempotent and manual API calls are easy
//! to script.
//!
//! Usage: cargo run --bin seeder

use chrono::{TimeZone, Utc};
use gigpay_db::entities::sea_orm_active_enums::{ContractStatus, ProfileType};
use gigpay_db::entities::{contracts, jobs, profiles};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use uuid::Uuid;

fn profile_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn contract_id(n: u128) -> Uuid {
    Uuid::from_u128(0x100 + n)
}

fn job_id(n: u128) -> Uuid {
    Uuid::from_u128(0x200 + n)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = gigpay_db::connect(&database_url, 5)
        .await
        .expect("Failed to connect to database");

    // Idempotency check on the first seeded profile.
    if profiles::Entity::find_by_id(profile_id(1))
        .one(&db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("Seed data already present, skipping...");
        return;
    }

    println!("Seeding profiles...");
    seed_profiles(&db).await;

    println!("Seeding contracts...");
    seed_contracts(&db).await;

    println!("Seeding jobs...");
    seed_jobs(&db).await;

    println!("Seeding complete!");
}

async fn seed_profiles(db: &DatabaseConnection) {
    let rows: [(u128, &str, &str, &str, Decimal, ProfileType); 8] = [
        (1, "Harry", "Potter", "wizard", dec!(1150.00), ProfileType::Client),
        (2, "Mr", "Robot", "hacker", dec!(231.11), ProfileType::Client),
        (3, "John", "Snow", "knows nothing", dec!(451.30), ProfileType::Client),
        (4, "Ash", "Ketchum", "pokemon master", dec!(1.30), ProfileType::Client),
        (5, "John", "Lenon", "musician", dec!(64.00), ProfileType::Contractor),
        (6, "Linus", "Torvalds", "programmer", dec!(1214.00), ProfileType::Contractor),
        (7, "Alan", "Turing", "programmer", dec!(22.00), ProfileType::Contractor),
        (8, "Aragorn", "Elessar", "fighter", dec!(314.00), ProfileType::Contractor),
    ];

    let now = Utc::now();
    for (n, first, last, profession, balance, profile_type) in rows {
        profiles::ActiveModel {
            id: Set(profile_id(n)),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            profession: Set(profession.to_string()),
            balance: Set(balance),
            profile_type: Set(profile_type),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
        .expect("Failed to insert profile");
    }
}

async fn seed_contracts(db: &DatabaseConnection) {
    // (contract, client, contractor, status)
    let rows: [(u128, u128, u128, ContractStatus); 9] = [
        (1, 1, 5, ContractStatus::Terminated),
        (2, 1, 6, ContractStatus::InProgress),
        (3, 2, 6, ContractStatus::InProgress),
        (4, 2, 7, ContractStatus::InProgress),
        (5, 3, 8, ContractStatus::New),
        (6, 3, 7, ContractStatus::InProgress),
        (7, 4, 7, ContractStatus::InProgress),
        (8, 4, 6, ContractStatus::InProgress),
        (9, 4, 8, ContractStatus::InProgress),
    ];

    let now = Utc::now();
    for (n, client, contractor, status) in rows {
        contracts::ActiveModel {
            id: Set(contract_id(n)),
            terms: Set("bla bla bla".to_string()),
            status: Set(status),
            client_id: Set(profile_id(client)),
            contractor_id: Set(profile_id(contractor)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
        .expect("Failed to insert contract");
    }
}

async fn seed_jobs(db: &DatabaseConnection) {
    // (job, contract, price, paid day-of-month, or None for unpaid)
    let rows: [(u128, u128, Decimal, Option<u32>); 14] = [
        (1, 1, dec!(200.00), None),
        (2, 2, dec!(201.00), None),
        (3, 3, dec!(202.00), None),
        (4, 4, dec!(200.00), None),
        (5, 7, dec!(200.00), None),
        (6, 7, dec!(2020.00), Some(15)),
        (7, 2, dec!(2020.00), Some(15)),
        (8, 3, dec!(200.00), Some(16)),
        (9, 1, dec!(200.00), Some(17)),
        (10, 5, dec!(200.00), Some(17)),
        (11, 1, dec!(21.00), None),
        (12, 2, dec!(21.00), None),
        (13, 3, dec!(121.00), None),
        (14, 3, dec!(121.00), Some(14)),
    ];

    let now = Utc::now();
    for (n, contract, price, paid_day) in rows {
        let paid_on = paid_day.map(|day| {
            Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0)
                .single()
                .expect("valid seed timestamp")
        });
        jobs::ActiveModel {
            id: Set(job_id(n)),
            contract_id: Set(contract_id(contract)),
            description: Set("work".to_string()),
            price: Set(price),
            paid: Set(paid_on.is_some()),
            paid_on: Set(paid_on.map(Into::into)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
        .expect("Failed to insert job");
    }
}
