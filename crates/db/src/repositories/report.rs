//! Report repository.
//!
//! Fetches typed payment rows for a time window and hands them to the
//! pure report service for aggregation. Two separate queries keep the
//! profile join unambiguous: the profession report joins the contractor
//! side, the client report joins the client side.

use gigpay_core::reports::{
    ClientPayment, ClientTotal, ProfessionEarning, ProfessionTotal, ReportService, ReportWindow,
};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::entities::{contracts, jobs, profiles};

#[derive(Debug, FromQueryResult)]
struct ProfessionRow {
    profession: String,
    price: Decimal,
}

#[derive(Debug, FromQueryResult)]
struct ClientRow {
    client_id: Uuid,
    first_name: String,
    last_name: String,
    price: Decimal,
}

/// Read access for the ranking reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profession that earned the most from jobs paid inside the window,
    /// or `None` when the window holds no payments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn best_profession(
        &self,
        window: ReportWindow,
    ) -> Result<Option<ProfessionTotal>, DbErr> {
        let rows = jobs::Entity::find()
            .select_only()
            .column(jobs::Column::Price)
            .column_as(profiles::Column::Profession, "profession")
            .join(JoinType::InnerJoin, jobs::Relation::Contract.def())
            .join(JoinType::InnerJoin, contracts::Relation::Contractor.def())
            .filter(Self::window_filter(window))
            .into_model::<ProfessionRow>()
            .all(&self.db)
            .await?;

        let earnings: Vec<ProfessionEarning> = rows
            .into_iter()
            .map(|row| ProfessionEarning {
                profession: row.profession,
                price: row.price,
            })
            .collect();
        Ok(ReportService::best_profession(&earnings))
    }

    /// Clients who paid the most inside the window, at most `limit` of
    /// them, highest total first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn best_clients(
        &self,
        window: ReportWindow,
        limit: usize,
    ) -> Result<Vec<ClientTotal>, DbErr> {
        let rows = jobs::Entity::find()
            .select_only()
            .column(jobs::Column::Price)
            .column_as(profiles::Column::Id, "client_id")
            .column_as(profiles::Column::FirstName, "first_name")
            .column_as(profiles::Column::LastName, "last_name")
            .join(JoinType::InnerJoin, jobs::Relation::Contract.def())
            .join(JoinType::InnerJoin, contracts::Relation::Client.def())
            .filter(Self::window_filter(window))
            .into_model::<ClientRow>()
            .all(&self.db)
            .await?;

        let payments: Vec<ClientPayment> = rows
            .into_iter()
            .map(|row| ClientPayment {
                client_id: row.client_id,
                full_name: format!("{} {}", row.first_name, row.last_name),
                price: row.price,
            })
            .collect();
        Ok(ReportService::best_clients(&payments, limit))
    }

    fn window_filter(window: ReportWindow) -> sea_orm::sea_query::Condition {
        let start: DateTimeWithTimeZone = window.start().into();
        let end: DateTimeWithTimeZone = window.end_exclusive().into();
        sea_orm::sea_query::Condition::all()
            .add(jobs::Column::Paid.eq(true))
            .add(jobs::Column::PaidOn.gte(start))
            .add(jobs::Column::PaidOn.lt(end))
    }
}
