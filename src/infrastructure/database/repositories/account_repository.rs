use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::domain::{Account, AccountRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::account;
use crate::infrastructure::database::DbHandle;

pub struct SeaOrmAccountRepository {
    db: DbHandle,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: account::Model) -> Account {
    Account {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        display_name: model.display_name,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
        last_login_at: model.last_login_at,
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_login(&self, login: &str) -> DomainResult<Option<Account>> {
        let db = self.db.require()?;

        let model = account::Entity::find()
            .filter(
                account::Column::Username
                    .eq(login)
                    .or(account::Column::Email.eq(login)),
            )
            .one(&db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        let db = self.db.require()?;

        let model = account::Entity::find_by_id(id)
            .one(&db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(model.map(model_to_domain))
    }

    async fn touch_last_login(&self, id: i64) -> DomainResult<()> {
        let db = self.db.require()?;

        let existing = account::Entity::find_by_id(id)
            .one(&db)
            .await
            .map_err(DomainError::from_db)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound { entity: "User" });
        };

        let mut active: account::ActiveModel = existing.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&db).await.map_err(DomainError::from_db)?;

        Ok(())
    }
}
