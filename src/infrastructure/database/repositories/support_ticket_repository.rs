use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::{
    DomainError, DomainResult, NewSupportTicket, SupportTicket, SupportTicketRepository,
};
use crate::infrastructure::database::entities::support_ticket;
use crate::infrastructure::database::DbHandle;
use crate::shared::PaginatedResult;

pub struct SeaOrmSupportTicketRepository {
    db: DbHandle,
}

impl SeaOrmSupportTicketRepository {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: support_ticket::Model) -> SupportTicket {
    SupportTicket {
        id: model.id,
        ticket_number: model.ticket_number,
        account_no: model.account_no,
        name: model.name,
        email: model.email,
        phone: model.phone,
        category: model.category,
        subject: model.subject,
        message: model.message,
        priority: model.priority,
        status: model.status,
        created_at: model.created_at,
    }
}

#[async_trait]
impl SupportTicketRepository for SeaOrmSupportTicketRepository {
    async fn create(&self, new: NewSupportTicket) -> DomainResult<i64> {
        let db = self.db.require()?;

        let active = support_ticket::ActiveModel {
            id: NotSet,
            ticket_number: Set(new.ticket_number),
            account_no: Set(new.account_no),
            name: Set(new.name),
            email: Set(new.email),
            phone: Set(new.phone),
            category: Set(new.category),
            subject: Set(new.subject),
            message: Set(new.message),
            priority: Set(new.priority),
            status: Set("open".to_owned()),
            created_at: Set(Utc::now()),
        };

        let inserted = active.insert(&db).await.map_err(DomainError::from_db)?;

        Ok(inserted.id)
    }

    async fn list_for_account(
        &self,
        account_no: &str,
        status: Option<String>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<SupportTicket>> {
        let db = self.db.require()?;

        let mut query = support_ticket::Entity::find()
            .filter(support_ticket::Column::AccountNo.eq(account_no));

        if let Some(status) = status {
            query = query.filter(support_ticket::Column::Status.eq(status));
        }

        let total = query
            .clone()
            .count(&db)
            .await
            .map_err(DomainError::from_db)?;

        let rows = query
            .order_by_desc(support_ticket::Column::CreatedAt)
            .offset((page - 1) * limit)
            .limit(limit)
            .all(&db)
            .await
            .map_err(DomainError::from_db)?;

        let items = rows.into_iter().map(model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
