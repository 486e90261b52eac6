//! `SeaORM` entity definitions.

pub mod contracts;
pub mod jobs;
pub mod profiles;
pub mod sea_orm_active_enums;
