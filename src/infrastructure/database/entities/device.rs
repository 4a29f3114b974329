//! Device entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment-tracking device model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Stringified id of the owning account.
    pub account_no: String,
    pub device_name: String,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub location: String,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::device_transaction::Entity")]
    DeviceTransactions,
}

impl Related<super::device_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeviceTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
