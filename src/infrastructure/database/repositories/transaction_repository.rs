use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::{
    DateRange, DeviceTransaction, DomainError, DomainResult, GameStatus, TransactionRepository,
    TransactionWithDevice,
};
use crate::infrastructure::database::entities::{device, device_transaction};
use crate::infrastructure::database::DbHandle;
use crate::shared::PaginatedResult;

pub struct SeaOrmTransactionRepository {
    db: DbHandle,
}

impl SeaOrmTransactionRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn game_status_to_domain(status: device_transaction::GameStatus) -> GameStatus {
    match status {
        device_transaction::GameStatus::Played => GameStatus::Played,
        device_transaction::GameStatus::NotPlayed => GameStatus::NotPlayed,
    }
}

fn model_to_domain(model: device_transaction::Model) -> DeviceTransaction {
    DeviceTransaction {
        id: model.id,
        account_no: model.account_no,
        device_id: model.device_id,
        transaction_id: model.transaction_id,
        amount: model.amount,
        running_balance: model.running_balance,
        payer_name: model.payer_name,
        phone_number: model.phone_number,
        game_status: game_status_to_domain(model.game_status),
        transaction_date: model.transaction_date,
    }
}

#[async_trait]
impl TransactionRepository for SeaOrmTransactionRepository {
    async fn list_for_account(
        &self,
        account_no: &str,
        range: DateRange,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<TransactionWithDevice>> {
        let db = self.db.require()?;

        let mut query = device_transaction::Entity::find()
            .filter(device_transaction::Column::AccountNo.eq(account_no));

        if let Some(start) = range.start_bound() {
            query = query.filter(device_transaction::Column::TransactionDate.gte(start));
        }
        if let Some(end) = range.end_bound() {
            query = query.filter(device_transaction::Column::TransactionDate.lte(end));
        }

        // The total honours the same filters as the page slice
        let total = query
            .clone()
            .count(&db)
            .await
            .map_err(DomainError::from_db)?;

        let rows = query
            .find_also_related(device::Entity)
            .order_by_desc(device_transaction::Column::TransactionDate)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&db)
            .await
            .map_err(DomainError::from_db)?;

        let items = rows
            .into_iter()
            .map(|(tx, dev)| TransactionWithDevice {
                transaction: model_to_domain(tx),
                device_name: dev.map(|d| d.device_name),
            })
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn earnings_for_account(&self, account_no: &str) -> DomainResult<(Decimal, u64)> {
        let db = self.db.require()?;

        let played = device_transaction::Entity::find()
            .filter(device_transaction::Column::AccountNo.eq(account_no))
            .filter(device_transaction::Column::GameStatus.eq(device_transaction::GameStatus::Played));

        let earnings: Option<Option<Decimal>> = played
            .clone()
            .select_only()
            .column_as(device_transaction::Column::Amount.sum(), "total")
            .into_tuple()
            .one(&db)
            .await
            .map_err(DomainError::from_db)?;

        let games = played.count(&db).await.map_err(DomainError::from_db)?;

        Ok((earnings.flatten().unwrap_or_default(), games))
    }
}
