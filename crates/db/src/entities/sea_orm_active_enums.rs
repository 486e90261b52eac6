//! String-backed enums shared by the entities.
//!
//! Stored as short strings rather than native database enums so the same
//! schema works on SQLite (dev/test) and Postgres (deployment).

use gigpay_core::transfer::{ContractState, ProfileKind};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role of a profile.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    /// Commissions and pays for work.
    #[sea_orm(string_value = "client")]
    Client,
    /// Performs work.
    #[sea_orm(string_value = "contractor")]
    Contractor,
}

/// Lifecycle status of a contract.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Created, work not started.
    #[sea_orm(string_value = "new")]
    New,
    /// Active; jobs under it may be paid.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Finished or cancelled.
    #[sea_orm(string_value = "terminated")]
    Terminated,
}

impl From<ProfileType> for ProfileKind {
    fn from(value: ProfileType) -> Self {
        match value {
            ProfileType::Client => Self::Client,
            ProfileType::Contractor => Self::Contractor,
        }
    }
}

impl From<ContractStatus> for ContractState {
    fn from(value: ContractStatus) -> Self {
        match value {
            ContractStatus::New => Self::New,
            ContractStatus::InProgress => Self::InProgress,
            ContractStatus::Terminated => Self::Terminated,
        }
    }
}
