use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::domain::{
    DomainError, DomainResult, NewWithdrawal, Withdrawal, WithdrawalRepository, WithdrawalStatus,
};
use crate::infrastructure::database::entities::withdrawal;
use crate::infrastructure::database::DbHandle;
use crate::shared::PaginatedResult;

pub struct SeaOrmWithdrawalRepository {
    db: DbHandle,
}

impl SeaOrmWithdrawalRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn status_to_entity(status: WithdrawalStatus) -> withdrawal::WithdrawalStatus {
    match status {
        WithdrawalStatus::Pending => withdrawal::WithdrawalStatus::Pending,
        WithdrawalStatus::Processing => withdrawal::WithdrawalStatus::Processing,
        WithdrawalStatus::Completed => withdrawal::WithdrawalStatus::Completed,
        WithdrawalStatus::Failed => withdrawal::WithdrawalStatus::Failed,
    }
}

fn status_to_domain(status: withdrawal::WithdrawalStatus) -> WithdrawalStatus {
    match status {
        withdrawal::WithdrawalStatus::Pending => WithdrawalStatus::Pending,
        withdrawal::WithdrawalStatus::Processing => WithdrawalStatus::Processing,
        withdrawal::WithdrawalStatus::Completed => WithdrawalStatus::Completed,
        withdrawal::WithdrawalStatus::Failed => WithdrawalStatus::Failed,
    }
}

fn model_to_domain(model: withdrawal::Model) -> Withdrawal {
    Withdrawal {
        id: model.id,
        account_no: model.account_no,
        transaction_code: model.transaction_code,
        amount: model.amount,
        withdrawal_account: model.withdrawal_account,
        account_name: model.account_name,
        payment_method: model.payment_method,
        status: status_to_domain(model.status),
        withdrawal_date: model.withdrawal_date,
        processed_date: model.processed_date,
    }
}

#[async_trait]
impl WithdrawalRepository for SeaOrmWithdrawalRepository {
    async fn create(&self, new: NewWithdrawal) -> DomainResult<i64> {
        let db = self.db.require()?;

        let txn = db.begin().await.map_err(DomainError::from_db)?;

        let active = withdrawal::ActiveModel {
            id: NotSet,
            account_no: Set(new.account_no),
            transaction_code: Set(new.transaction_code),
            amount: Set(new.amount),
            withdrawal_account: Set(new.withdrawal_account),
            account_name: Set(new.account_name),
            payment_method: Set(new.payment_method),
            status: Set(withdrawal::WithdrawalStatus::Pending),
            withdrawal_date: Set(Utc::now()),
            processed_date: Set(None),
        };

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(err) => {
                // Nothing must remain half-written on failure
                txn.rollback().await.map_err(DomainError::from_db)?;
                return Err(DomainError::from_db(err));
            }
        };

        txn.commit().await.map_err(DomainError::from_db)?;

        Ok(inserted.id)
    }

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<WithdrawalStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Withdrawal>> {
        let db = self.db.require()?;

        let mut query =
            withdrawal::Entity::find().filter(withdrawal::Column::AccountNo.eq(account_no));

        if let Some(status) = status {
            query = query.filter(withdrawal::Column::Status.eq(status_to_entity(status)));
        }

        let total = query
            .clone()
            .count(&db)
            .await
            .map_err(DomainError::from_db)?;

        let rows = query
            .order_by_desc(withdrawal::Column::WithdrawalDate)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&db)
            .await
            .map_err(DomainError::from_db)?;

        let items = rows.into_iter().map(model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn count_pending(&self, account_no: &str) -> DomainResult<u64> {
        let db = self.db.require()?;

        withdrawal::Entity::find()
            .filter(withdrawal::Column::AccountNo.eq(account_no))
            .filter(withdrawal::Column::Status.eq(withdrawal::WithdrawalStatus::Pending))
            .count(&db)
            .await
            .map_err(DomainError::from_db)
    }
}
