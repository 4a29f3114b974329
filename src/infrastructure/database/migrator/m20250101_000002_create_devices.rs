//! Create devices table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::AccountNo).string_len(32).not_null())
                    .col(ColumnDef::new(Devices::DeviceName).string().not_null())
                    .col(
                        ColumnDef::new(Devices::SerialNumber)
                            .string_len(60)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Devices::Location).string().not_null())
                    .col(
                        ColumnDef::new(Devices::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Devices::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Devices::LastActivityAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // All device lookups are scoped by account
        manager
            .create_index(
                Index::create()
                    .name("idx_devices_account_no")
                    .table(Devices::Table)
                    .col(Devices::AccountNo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Devices {
    Table,
    Id,
    AccountNo,
    DeviceName,
    SerialNumber,
    Location,
    Status,
    RegisteredAt,
    LastActivityAt,
}
