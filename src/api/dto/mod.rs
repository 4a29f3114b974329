//! Request/response DTOs for the REST API

pub mod common;
pub mod device;
pub mod support;
pub mod transaction;
pub mod user;
pub mod withdrawal;

pub use common::Pagination;
pub use device::{BalanceResponse, DeviceDto};
pub use support::{CreateTicketRequest, SupportTicketDto, TicketCreatedResponse, TicketListResponse};
pub use transaction::{TransactionDto, TransactionListResponse, TransactionQuery};
pub use user::{LoginRequest, LoginResponse, UserInfo, UserProfile};
pub use withdrawal::{
    CreateWithdrawalRequest, WithdrawalCreatedResponse, WithdrawalDto, WithdrawalListResponse,
    WithdrawalQuery,
};
