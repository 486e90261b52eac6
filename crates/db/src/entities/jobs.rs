//! `SeaORM` entity for the jobs table.

use gigpay_core::transfer::JobSnapshot;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A unit of work under a contract.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    /// Job ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning contract.
    pub contract_id: Uuid,
    /// What the job is.
    pub description: String,
    /// Price to pay. Positive by invariant.
    #[sea_orm(column_type = "Decimal(Some((20, 4)))")]
    pub price: Decimal,
    /// Paid flag. Monotonic false -> true, never reversed.
    pub paid: bool,
    /// Payment instant; present iff `paid` is true.
    pub paid_on: Option<DateTimeWithTimeZone>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Relation to the owning contract.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning contract.
    #[sea_orm(
        belongs_to = "super::contracts::Entity",
        from = "Column::ContractId",
        to = "super::contracts::Column::Id"
    )]
    Contract,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Point-in-time view handed to core validation.
    #[must_use]
    pub fn snapshot(&self) -> JobSnapshot {
        JobSnapshot {
            id: self.id,
            contract_id: self.contract_id,
            price: self.price,
            paid: self.paid,
        }
    }
}
