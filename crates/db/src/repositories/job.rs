//! Job repository for the unpaid-work listing.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::ContractStatus;
use crate::entities::{contracts, jobs};
use crate::repositories::contract::party_condition;

/// Read access to jobs.
#[derive(Debug, Clone)]
pub struct JobRepository {
    db: DatabaseConnection,
}

impl JobRepository {
    /// Creates a new job repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists unpaid jobs on the caller's in-progress contracts, oldest
    /// first. Jobs under new or terminated contracts never appear even
    /// when unpaid.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_unpaid_for_party(&self, caller_id: Uuid) -> Result<Vec<jobs::Model>, DbErr> {
        jobs::Entity::find()
            .join(JoinType::InnerJoin, jobs::Relation::Contract.def())
            .filter(jobs::Column::Paid.eq(false))
            .filter(contracts::Column::Status.eq(ContractStatus::InProgress))
            .filter(party_condition(caller_id))
            .order_by_asc(jobs::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
