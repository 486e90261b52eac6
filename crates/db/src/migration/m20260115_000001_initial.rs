//! Initial database migration.
//!
//! Creates the profiles, contracts, and jobs tables with their foreign
//! keys and the indexes the query and reporting paths rely on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profiles::FirstName).string().not_null())
                    .col(ColumnDef::new(Profiles::LastName).string().not_null())
                    .col(ColumnDef::new(Profiles::Profession).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::Balance)
                            .decimal_len(20, 4)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::ProfileType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contracts::Terms).text().not_null())
                    .col(ColumnDef::new(Contracts::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Contracts::ClientId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::ContractorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Contracts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contracts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_client")
                            .from(Contracts::Table, Contracts::ClientId)
                            .to(Profiles::Table, Profiles::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_contractor")
                            .from(Contracts::Table, Contracts::ContractorId)
                            .to(Profiles::Table, Profiles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::ContractId).uuid().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::Price).decimal_len(20, 4).not_null())
                    .col(
                        ColumnDef::new(Jobs::Paid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Jobs::PaidOn).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_contract")
                            .from(Jobs::Table, Jobs::ContractId)
                            .to(Contracts::Table, Contracts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Party-scoped contract lookups.
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_client")
                    .table(Contracts::Table)
                    .col(Contracts::ClientId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_contractor")
                    .table(Contracts::Table)
                    .col(Contracts::ContractorId)
                    .to_owned(),
            )
            .await?;

        // Unpaid-job scans and report window scans.
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_contract")
                    .table(Jobs::Table)
                    .col(Jobs::ContractId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_paid_on")
                    .table(Jobs::Table)
                    .col(Jobs::Paid)
                    .col(Jobs::PaidOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    FirstName,
    LastName,
    Profession,
    Balance,
    ProfileType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    Terms,
    Status,
    ClientId,
    ContractorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    ContractId,
    Description,
    Price,
    Paid,
    PaidOn,
    CreatedAt,
    UpdatedAt,
}
