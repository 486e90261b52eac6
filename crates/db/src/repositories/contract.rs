//! Contract repository scoping every lookup to the calling party.

use sea_orm::sea_query::Condition;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::contracts;
use crate::entities::sea_orm_active_enums::ContractStatus;

/// Predicate matching contracts where the given profile is either party.
///
/// Shared by contract and job lookups so visibility rules stay in one place.
#[must_use]
pub fn party_condition(profile_id: Uuid) -> Condition {
    Condition::any()
        .add(contracts::Column::ClientId.eq(profile_id))
        .add(contracts::Column::ContractorId.eq(profile_id))
}

/// Read access to contracts, always filtered by party membership.
#[derive(Debug, Clone)]
pub struct ContractRepository {
    db: DatabaseConnection,
}

impl ContractRepository {
    /// Creates a new contract repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a contract by ID only if the caller is a party to it.
    ///
    /// A contract that exists but belongs to other parties comes back as
    /// `None`, indistinguishable from a missing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_party(
        &self,
        caller_id: Uuid,
        contract_id: Uuid,
    ) -> Result<Option<contracts::Model>, DbErr> {
        contracts::Entity::find_by_id(contract_id)
            .filter(party_condition(caller_id))
            .one(&self.db)
            .await
    }

    /// Lists the caller's non-terminated contracts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_party(&self, caller_id: Uuid) -> Result<Vec<contracts::Model>, DbErr> {
        contracts::Entity::find()
            .filter(party_condition(caller_id))
            .filter(contracts::Column::Status.ne(ContractStatus::Terminated))
            .order_by_asc(contracts::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
