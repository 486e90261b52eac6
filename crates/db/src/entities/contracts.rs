//! `SeaORM` entity for the contracts table.

use gigpay_core::transfer::ContractSnapshot;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ContractStatus;

/// A working agreement between one client and one contractor.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    /// Contract ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Agreement text.
    pub terms: String,
    /// Lifecycle status.
    pub status: ContractStatus,
    /// The client party. Distinct from the contractor by invariant.
    pub client_id: Uuid,
    /// The contractor party.
    pub contractor_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Both parties point at the profiles table, so the relations are named
/// rather than derived.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The paying client.
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ClientId",
        to = "super::profiles::Column::Id"
    )]
    Client,
    /// The performing contractor.
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ContractorId",
        to = "super::profiles::Column::Id"
    )]
    Contractor,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Point-in-time view handed to core validation.
    #[must_use]
    pub fn snapshot(&self) -> ContractSnapshot {
        ContractSnapshot {
            id: self.id,
            status: self.status.clone().into(),
            client_id: self.client_id,
            contractor_id: self.contractor_id,
        }
    }
}
