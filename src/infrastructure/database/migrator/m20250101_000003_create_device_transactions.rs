//! Create device_transactions table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_devices::Devices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceTransactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::AccountNo)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::DeviceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::TransactionId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::RunningBalance)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeviceTransactions::PayerName).string().not_null())
                    .col(
                        ColumnDef::new(DeviceTransactions::PhoneNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::GameStatus)
                            .string_len(20)
                            .not_null()
                            .default("played"),
                    )
                    .col(
                        ColumnDef::new(DeviceTransactions::TransactionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_transactions_device")
                            .from(DeviceTransactions::Table, DeviceTransactions::DeviceId)
                            .to(Devices::Table, Devices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_device_transactions_account_no")
                    .table(DeviceTransactions::Table)
                    .col(DeviceTransactions::AccountNo)
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by transaction_date DESC
        manager
            .create_index(
                Index::create()
                    .name("idx_device_transactions_date")
                    .table(DeviceTransactions::Table)
                    .col(DeviceTransactions::TransactionDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceTransactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum DeviceTransactions {
    Table,
    Id,
    AccountNo,
    DeviceId,
    TransactionId,
    Amount,
    RunningBalance,
    PayerName,
    PhoneNumber,
    GameStatus,
    TransactionDate,
}
