pub mod account;
pub mod device;
pub mod support_ticket;
pub mod transaction;
pub mod withdrawal;
