//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives handlers unified access to all per-aggregate
//! repositories. The SeaORM implementation lives in
//! `infrastructure::database::repositories`; tests substitute in-memory
//! fakes.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::models::account::Account;
use super::models::device::DeviceWithBalance;
use super::models::support_ticket::{NewSupportTicket, SupportTicket};
use super::models::transaction::{DateRange, TransactionWithDevice};
use super::models::withdrawal::{NewWithdrawal, Withdrawal, WithdrawalStatus};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up an account by username or email (login form accepts either).
    async fn find_by_login(&self, login: &str) -> DomainResult<Option<Account>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>>;

    /// Best-effort stamp of a successful login.
    async fn touch_last_login(&self, id: i64) -> DomainResult<()>;
}

#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// All devices owned by the account, each with its accrued balance.
    async fn list_for_account(&self, account_no: &str) -> DomainResult<Vec<DeviceWithBalance>>;

    /// Balance of one device, scoped to the owning account. Zero when the
    /// device has no transactions (or does not belong to the account).
    async fn balance(&self, account_no: &str, device_id: i64) -> DomainResult<Decimal>;

    async fn count_for_account(&self, account_no: &str) -> DomainResult<u64>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Paginated transactions for the account, newest first, optionally
    /// restricted to a date range. Each row carries the device name.
    async fn list_for_account(
        &self,
        account_no: &str,
        range: DateRange,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<TransactionWithDevice>>;

    /// (total earnings from played games, number of played games).
    async fn earnings_for_account(&self, account_no: &str) -> DomainResult<(Decimal, u64)>;
}

#[async_trait]
pub trait WithdrawalRepository: Send + Sync {
    /// Record a withdrawal request as one atomic unit: the row is inserted
    /// with status `pending` inside a transaction that is rolled back in
    /// full on any failure. Returns the new row id.
    ///
    /// A duplicate `transaction_code` surfaces as `DomainError::Conflict` so
    /// the caller can regenerate the code and retry.
    async fn create(&self, new: NewWithdrawal) -> DomainResult<i64>;

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<WithdrawalStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Withdrawal>>;

    async fn count_pending(&self, account_no: &str) -> DomainResult<u64>;
}

#[async_trait]
pub trait SupportTicketRepository: Send + Sync {
    /// Open a ticket; returns the new row id. Duplicate `ticket_number`
    /// surfaces as `DomainError::Conflict`.
    async fn create(&self, new: NewSupportTicket) -> DomainResult<i64>;

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<String>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<SupportTicket>>;
}

/// Unified access to all repositories. Consumers request only what they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let account = repos.accounts().find_by_login("jdoe").await?;
///     let devices = repos.devices().list_for_account("1").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn accounts(&self) -> &dyn AccountRepository;
    fn devices(&self) -> &dyn DeviceRepository;
    fn transactions(&self) -> &dyn TransactionRepository;
    fn withdrawals(&self) -> &dyn WithdrawalRepository;
    fn support_tickets(&self) -> &dyn SupportTicketRepository;
}
