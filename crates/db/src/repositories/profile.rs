//! Profile repository backing identity resolution.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::profiles;

/// Read access to profiles.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    db: DatabaseConnection,
}

impl ProfileRepository {
    /// Creates a new profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a profile by ID. The identity resolver turns `None` into
    /// an authentication failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<profiles::Model>, DbErr> {
        profiles::Entity::find_by_id(id).one(&self.db).await
    }
}
