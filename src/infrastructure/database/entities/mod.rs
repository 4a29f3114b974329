pub mod account;
pub mod device;
pub mod device_transaction;
pub mod support_ticket;
pub mod withdrawal;
