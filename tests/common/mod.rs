//! Shared harness: an in-memory `RepositoryProvider` and router builders.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tower::ServiceExt;

use paytrack::auth::{create_token, hash_password, JwtConfig};
use paytrack::domain::{
    Account, AccountRepository, DateRange, Device, DeviceRepository, DeviceTransaction,
    DeviceWithBalance, DomainError, DomainResult, GameStatus, NewSupportTicket, NewWithdrawal,
    RepositoryProvider, SupportTicket, SupportTicketRepository, TransactionRepository,
    TransactionWithDevice, Withdrawal, WithdrawalRepository, WithdrawalStatus,
};
use paytrack::shared::PaginatedResult;
use paytrack::{create_api_router, ApiState, DbHandle, RateLimitSettings};

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory repository provider backing the router under test.
#[derive(Default)]
pub struct InMemoryRepos {
    pub accounts: Mutex<Vec<Account>>,
    pub devices: Mutex<Vec<Device>>,
    pub transactions: Mutex<Vec<DeviceTransaction>>,
    pub withdrawals: Mutex<Vec<Withdrawal>>,
    pub tickets: Mutex<Vec<SupportTicket>>,
    next_id: AtomicI64,
    /// When set, every withdrawal insert fails as if the database dropped
    /// mid-transaction.
    pub fail_withdrawals: AtomicBool,
}

impl InMemoryRepos {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        })
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn with_account(self: Arc<Self>, id: i64, username: &str, password: &str) -> Arc<Self> {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        self.accounts.lock().unwrap().push(Account {
            id,
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            password_hash: hash_password(password).unwrap(),
            display_name: username.to_owned(),
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        });
        self
    }

    pub fn with_device(self: Arc<Self>, id: i64, account_no: &str, name: &str) -> Arc<Self> {
        let now = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
        self.devices.lock().unwrap().push(Device {
            id,
            account_no: account_no.to_owned(),
            device_name: name.to_owned(),
            serial_number: format!("SN-{id:08}"),
            location: "Nairobi".to_owned(),
            status: "active".to_owned(),
            registered_at: now,
            last_activity_at: None,
        });
        self
    }

    pub fn with_transaction(
        self: Arc<Self>,
        account_no: &str,
        device_id: i64,
        amount: i64,
        day: u32,
    ) -> Arc<Self> {
        let id = self.allocate_id();
        self.transactions.lock().unwrap().push(DeviceTransaction {
            id,
            account_no: account_no.to_owned(),
            device_id,
            transaction_id: format!("TXN{id:08}"),
            amount: Decimal::from(amount),
            running_balance: Decimal::from(amount),
            payer_name: "Payer".to_owned(),
            phone_number: "+254700000001".to_owned(),
            game_status: GameStatus::Played,
            transaction_date: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
        });
        self
    }
}

#[async_trait]
impl AccountRepository for InMemoryRepos {
    async fn find_by_login(&self, login: &str) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == login || a.email == login)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn touch_last_login(&self, id: i64) -> DomainResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::NotFound { entity: "User" })?;
        account.last_login_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl DeviceRepository for InMemoryRepos {
    async fn list_for_account(&self, account_no: &str) -> DomainResult<Vec<DeviceWithBalance>> {
        let transactions = self.transactions.lock().unwrap();
        Ok(self
            .devices
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.account_no == account_no)
            .map(|d| DeviceWithBalance {
                device: d.clone(),
                balance: transactions
                    .iter()
                    .filter(|t| t.device_id == d.id && t.account_no == account_no)
                    .map(|t| t.amount)
                    .sum(),
            })
            .collect())
    }

    async fn balance(&self, account_no: &str, device_id: i64) -> DomainResult<Decimal> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.device_id == device_id && t.account_no == account_no)
            .map(|t| t.amount)
            .sum())
    }

    async fn count_for_account(&self, account_no: &str) -> DomainResult<u64> {
        Ok(self
            .devices
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.account_no == account_no)
            .count() as u64)
    }
}

#[async_trait]
impl TransactionRepository for InMemoryRepos {
    async fn list_for_account(
        &self,
        account_no: &str,
        range: DateRange,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<TransactionWithDevice>> {
        let devices = self.devices.lock().unwrap();
        let mut rows: Vec<DeviceTransaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.account_no == account_no && range.contains(t.transaction_date))
            .cloned()
            .collect();
        rows.sort_by_key(|t| std::cmp::Reverse(t.transaction_date));

        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .map(|t| {
                let device_name = devices
                    .iter()
                    .find(|d| d.id == t.device_id)
                    .map(|d| d.device_name.clone());
                TransactionWithDevice {
                    transaction: t,
                    device_name,
                }
            })
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn earnings_for_account(&self, account_no: &str) -> DomainResult<(Decimal, u64)> {
        let played: Vec<Decimal> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.account_no == account_no && t.game_status == GameStatus::Played)
            .map(|t| t.amount)
            .collect();
        Ok((played.iter().copied().sum(), played.len() as u64))
    }
}

#[async_trait]
impl WithdrawalRepository for InMemoryRepos {
    async fn create(&self, new: NewWithdrawal) -> DomainResult<i64> {
        if self.fail_withdrawals.load(Ordering::SeqCst) {
            return Err(DomainError::Database(sea_orm::DbErr::Custom(
                "simulated connection loss".to_owned(),
            )));
        }

        let mut withdrawals = self.withdrawals.lock().unwrap();
        if withdrawals
            .iter()
            .any(|w| w.transaction_code == new.transaction_code)
        {
            return Err(DomainError::Conflict(format!(
                "Duplicate entry '{}'",
                new.transaction_code
            )));
        }

        let id = self.allocate_id();
        withdrawals.push(Withdrawal {
            id,
            account_no: new.account_no,
            transaction_code: new.transaction_code,
            amount: new.amount,
            withdrawal_account: new.withdrawal_account,
            account_name: new.account_name,
            payment_method: new.payment_method,
            status: WithdrawalStatus::Pending,
            withdrawal_date: Utc::now(),
            processed_date: None,
        });
        Ok(id)
    }

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<WithdrawalStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Withdrawal>> {
        let mut rows: Vec<Withdrawal> = self
            .withdrawals
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.account_no == account_no)
            .filter(|w| status.map_or(true, |s| w.status == s))
            .cloned()
            .collect();
        rows.sort_by_key(|w| std::cmp::Reverse(w.withdrawal_date));

        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn count_pending(&self, account_no: &str) -> DomainResult<u64> {
        Ok(self
            .withdrawals
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.account_no == account_no && w.status == WithdrawalStatus::Pending)
            .count() as u64)
    }
}

#[async_trait]
impl SupportTicketRepository for InMemoryRepos {
    async fn create(&self, new: NewSupportTicket) -> DomainResult<i64> {
        let mut tickets = self.tickets.lock().unwrap();
        if tickets.iter().any(|t| t.ticket_number == new.ticket_number) {
            return Err(DomainError::Conflict(format!(
                "Duplicate entry '{}'",
                new.ticket_number
            )));
        }

        let id = self.allocate_id();
        tickets.push(SupportTicket {
            id,
            ticket_number: new.ticket_number,
            account_no: new.account_no,
            name: new.name,
            email: new.email,
            phone: new.phone,
            category: new.category,
            subject: new.subject,
            message: new.message,
            priority: new.priority,
            status: "open".to_owned(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<String>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<SupportTicket>> {
        let rows: Vec<SupportTicket> = self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.account_no == account_no)
            .filter(|t| status.as_deref().map_or(true, |s| t.status == s))
            .cloned()
            .collect();

        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }
}

impl RepositoryProvider for InMemoryRepos {
    fn accounts(&self) -> &dyn AccountRepository {
        self
    }
    fn devices(&self) -> &dyn DeviceRepository {
        self
    }
    fn transactions(&self) -> &dyn TransactionRepository {
        self
    }
    fn withdrawals(&self) -> &dyn WithdrawalRepository {
        self
    }
    fn support_tickets(&self) -> &dyn SupportTicketRepository {
        self
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET, 24, "paytrack")
}

pub fn test_app(repos: Arc<InMemoryRepos>) -> Router {
    test_app_with_rate_limit(repos, RateLimitSettings::default())
}

pub fn test_app_with_rate_limit(repos: Arc<InMemoryRepos>, rate_limit: RateLimitSettings) -> Router {
    let state = ApiState {
        repos,
        jwt_config: jwt_config(),
        default_payment_method: "M-Pesa".to_owned(),
        environment: "test".to_owned(),
        db: DbHandle::new(),
    };
    create_api_router(state, rate_limit)
}

pub fn token_for(account_id: i64, username: &str) -> String {
    create_token(
        account_id,
        username,
        &format!("{username}@example.com"),
        &jwt_config(),
    )
    .unwrap()
}

/// Fire one request at the router. Always sets `x-forwarded-for` so the rate
/// limiter can key the client.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-forwarded-for", "198.51.100.7");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}
