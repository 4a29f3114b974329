mod account_repository;
mod device_repository;
mod repository_provider;
mod support_ticket_repository;
mod transaction_repository;
mod withdrawal_repository;

pub use account_repository::SeaOrmAccountRepository;
pub use device_repository::SeaOrmDeviceRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use support_ticket_repository::SeaOrmSupportTicketRepository;
pub use transaction_repository::SeaOrmTransactionRepository;
pub use withdrawal_repository::SeaOrmWithdrawalRepository;
