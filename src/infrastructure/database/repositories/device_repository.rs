use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::{Device, DeviceRepository, DeviceWithBalance, DomainError, DomainResult};
use crate::infrastructure::database::entities::{device, device_transaction};
use crate::infrastructure::database::DbHandle;

pub struct SeaOrmDeviceRepository {
    db: DbHandle,
}

impl SeaOrmDeviceRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: device::Model) -> Device {
    Device {
        id: model.id,
        account_no: model.account_no,
        device_name: model.device_name,
        serial_number: model.serial_number,
        location: model.location,
        status: model.status,
        registered_at: model.registered_at,
        last_activity_at: model.last_activity_at,
    }
}

#[async_trait]
impl DeviceRepository for SeaOrmDeviceRepository {
    async fn list_for_account(&self, account_no: &str) -> DomainResult<Vec<DeviceWithBalance>> {
        let db = self.db.require()?;

        let devices = device::Entity::find()
            .filter(device::Column::AccountNo.eq(account_no))
            .order_by_asc(device::Column::Id)
            .all(&db)
            .await
            .map_err(DomainError::from_db)?;

        // Balances for the whole account in a single grouped query
        let sums: Vec<(i64, Option<Decimal>)> = device_transaction::Entity::find()
            .select_only()
            .column(device_transaction::Column::DeviceId)
            .column_as(device_transaction::Column::Amount.sum(), "balance")
            .filter(device_transaction::Column::AccountNo.eq(account_no))
            .group_by(device_transaction::Column::DeviceId)
            .into_tuple()
            .all(&db)
            .await
            .map_err(DomainError::from_db)?;

        let balances: HashMap<i64, Decimal> = sums
            .into_iter()
            .map(|(device_id, balance)| (device_id, balance.unwrap_or_default()))
            .collect();

        Ok(devices
            .into_iter()
            .map(|model| {
                let balance = balances.get(&model.id).copied().unwrap_or_default();
                DeviceWithBalance {
                    device: model_to_domain(model),
                    balance,
                }
            })
            .collect())
    }

    async fn balance(&self, account_no: &str, device_id: i64) -> DomainResult<Decimal> {
        let db = self.db.require()?;

        let sum: Option<Option<Decimal>> = device_transaction::Entity::find()
            .select_only()
            .column_as(device_transaction::Column::Amount.sum(), "balance")
            .filter(device_transaction::Column::AccountNo.eq(account_no))
            .filter(device_transaction::Column::DeviceId.eq(device_id))
            .into_tuple()
            .one(&db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(sum.flatten().unwrap_or_default())
    }

    async fn count_for_account(&self, account_no: &str) -> DomainResult<u64> {
        let db = self.db.require()?;

        device::Entity::find()
            .filter(device::Column::AccountNo.eq(account_no))
            .count(&db)
            .await
            .map_err(DomainError::from_db)
    }
}
