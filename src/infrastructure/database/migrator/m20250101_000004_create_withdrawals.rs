//! Create withdrawals table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Withdrawals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Withdrawals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::AccountNo)
                            .string_len(32)
                            .not_null(),
                    )
                    // Uniqueness backs the regenerate-on-conflict code scheme
                    .col(
                        ColumnDef::new(Withdrawals::TransactionCode)
                            .string_len(16)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::WithdrawalAccount)
                            .string_len(60)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Withdrawals::AccountName).string().not_null())
                    .col(
                        ColumnDef::new(Withdrawals::PaymentMethod)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::WithdrawalDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Withdrawals::ProcessedDate).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_withdrawals_account_no")
                    .table(Withdrawals::Table)
                    .col(Withdrawals::AccountNo)
                    .to_owned(),
            )
            .await?;

        // Pending-count query for the dashboard
        manager
            .create_index(
                Index::create()
                    .name("idx_withdrawals_status")
                    .table(Withdrawals::Table)
                    .col(Withdrawals::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Withdrawals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Withdrawals {
    Table,
    Id,
    AccountNo,
    TransactionCode,
    Amount,
    WithdrawalAccount,
    AccountName,
    PaymentMethod,
    Status,
    WithdrawalDate,
    ProcessedDate,
}
