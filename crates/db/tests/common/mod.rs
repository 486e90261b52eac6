//! Shared fixtures for database integration tests.
//!
//! Tests run against a fresh in-memory SQLite database. The pool is
//! pinned to one connection so every handle sees the same database.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use gigpay_db::entities::sea_orm_active_enums::{ContractStatus, ProfileType};
use gigpay_db::entities::{contracts, jobs, profiles};
use gigpay_db::migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Connects to a fresh in-memory database and applies the schema.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    db
}

/// Inserts a profile and returns its ID.
pub async fn insert_profile(
    db: &DatabaseConnection,
    profile_type: ProfileType,
    first_name: &str,
    last_name: &str,
    profession: &str,
    balance: Decimal,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    profiles::ActiveModel {
        id: Set(id),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        profession: Set(profession.to_string()),
        balance: Set(balance),
        profile_type: Set(profile_type),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("insert profile");
    id
}

/// Inserts a client profile with the given balance.
pub async fn insert_client(db: &DatabaseConnection, first_name: &str, balance: Decimal) -> Uuid {
    insert_profile(db, ProfileType::Client, first_name, "Client", "none", balance).await
}

/// Inserts a contractor profile with the given profession and zero balance.
pub async fn insert_contractor(
    db: &DatabaseConnection,
    first_name: &str,
    profession: &str,
) -> Uuid {
    insert_profile(
        db,
        ProfileType::Contractor,
        first_name,
        "Contractor",
        profession,
        Decimal::ZERO,
    )
    .await
}

/// Inserts a contract and returns its ID.
pub async fn insert_contract(
    db: &DatabaseConnection,
    client_id: Uuid,
    contractor_id: Uuid,
    status: ContractStatus,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    contracts::ActiveModel {
        id: Set(id),
        terms: Set("standard terms".to_string()),
        status: Set(status),
        client_id: Set(client_id),
        contractor_id: Set(contractor_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("insert contract");
    id
}

/// Inserts a job and returns its ID. The job is paid iff `paid_on` is set.
pub async fn insert_job(
    db: &DatabaseConnection,
    contract_id: Uuid,
    price: Decimal,
    paid_on: Option<DateTime<Utc>>,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    jobs::ActiveModel {
        id: Set(id),
        contract_id: Set(contract_id),
        description: Set("work".to_string()),
        price: Set(price),
        paid: Set(paid_on.is_some()),
        paid_on: Set(paid_on.map(Into::into)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("insert job");
    id
}

/// Current balance of a profile.
pub async fn balance_of(db: &DatabaseConnection, id: Uuid) -> Decimal {
    profiles::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("query profile")
        .expect("profile exists")
        .balance
}

/// Reloads a job row.
pub async fn fetch_job(db: &DatabaseConnection, id: Uuid) -> jobs::Model {
    jobs::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("query job")
        .expect("job exists")
}
