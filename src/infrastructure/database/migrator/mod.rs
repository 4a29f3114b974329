//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_accounts;
mod m20250101_000002_create_devices;
mod m20250101_000003_create_device_transactions;
mod m20250101_000004_create_withdrawals;
mod m20250101_000005_create_support_tickets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_accounts::Migration),
            Box::new(m20250101_000002_create_devices::Migration),
            Box::new(m20250101_000003_create_device_transactions::Migration),
            Box::new(m20250101_000004_create_withdrawals::Migration),
            Box::new(m20250101_000005_create_support_tickets::Migration),
        ]
    }
}
