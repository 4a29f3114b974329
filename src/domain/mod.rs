//! Core business types and repository traits.

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, DomainResult};
pub use models::account::Account;
pub use models::device::{Device, DeviceWithBalance};
pub use models::support_ticket::{generate_ticket_number, NewSupportTicket, SupportTicket};
pub use models::transaction::{DateRange, DeviceTransaction, GameStatus, TransactionWithDevice};
pub use models::withdrawal::{
    generate_transaction_code, NewWithdrawal, Withdrawal, WithdrawalStatus,
};
pub use repositories::{
    AccountRepository, DeviceRepository, RepositoryProvider, SupportTicketRepository,
    TransactionRepository, WithdrawalRepository,
};
