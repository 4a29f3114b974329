//! Create support_tickets table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportTickets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::TicketNumber)
                            .string_len(16)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::AccountNo)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupportTickets::Name).string().not_null())
                    .col(ColumnDef::new(SupportTickets::Email).string().not_null())
                    .col(ColumnDef::new(SupportTickets::Phone).string_len(20))
                    .col(
                        ColumnDef::new(SupportTickets::Category)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupportTickets::Subject).string().not_null())
                    .col(ColumnDef::new(SupportTickets::Message).text().not_null())
                    .col(
                        ColumnDef::new(SupportTickets::Priority)
                            .string_len(20)
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::Status)
                            .string_len(20)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_support_tickets_account_no")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::AccountNo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportTickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SupportTickets {
    Table,
    Id,
    TicketNumber,
    AccountNo,
    Name,
    Email,
    Phone,
    Category,
    Subject,
    Message,
    Priority,
    Status,
    CreatedAt,
}
