//! `SeaORM` entity for the profiles table.

use gigpay_core::transfer::ProfileSnapshot;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProfileType;

/// A marketplace participant: either a client or a contractor.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Profile ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Profession label; meaningful for contractors.
    pub profession: String,
    /// Account balance. Non-negative by invariant; mutated only by the
    /// ledger repository.
    #[sea_orm(column_type = "Decimal(Some((20, 4)))")]
    pub balance: Decimal,
    /// Role of this profile.
    pub profile_type: ProfileType,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Profiles are referenced by contracts, not the other way around.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Display name used by reports.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Point-in-time view handed to core validation.
    #[must_use]
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            id: self.id,
            kind: self.profile_type.clone().into(),
            balance: self.balance,
        }
    }
}
