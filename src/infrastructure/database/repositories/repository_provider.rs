use crate::domain::{
    AccountRepository, DeviceRepository, RepositoryProvider, SupportTicketRepository,
    TransactionRepository, WithdrawalRepository,
};
use crate::infrastructure::database::DbHandle;

use super::{
    SeaOrmAccountRepository, SeaOrmDeviceRepository, SeaOrmSupportTicketRepository,
    SeaOrmTransactionRepository, SeaOrmWithdrawalRepository,
};

/// SeaORM-backed `RepositoryProvider`. All repositories share the same
/// swappable connection handle, so they come online together once the
/// database becomes reachable.
pub struct SeaOrmRepositoryProvider {
    accounts: SeaOrmAccountRepository,
    devices: SeaOrmDeviceRepository,
    transactions: SeaOrmTransactionRepository,
    withdrawals: SeaOrmWithdrawalRepository,
    support_tickets: SeaOrmSupportTicketRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DbHandle) -> Self {
        Self {
            accounts: SeaOrmAccountRepository::new(db.clone()),
            devices: SeaOrmDeviceRepository::new(db.clone()),
            transactions: SeaOrmTransactionRepository::new(db.clone()),
            withdrawals: SeaOrmWithdrawalRepository::new(db.clone()),
            support_tickets: SeaOrmSupportTicketRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn accounts(&self) -> &dyn AccountRepository {
        &self.accounts
    }

    fn devices(&self) -> &dyn DeviceRepository {
        &self.devices
    }

    fn transactions(&self) -> &dyn TransactionRepository {
        &self.transactions
    }

    fn withdrawals(&self) -> &dyn WithdrawalRepository {
        &self.withdrawals
    }

    fn support_tickets(&self) -> &dyn SupportTicketRepository {
        &self.support_tickets
    }
}
