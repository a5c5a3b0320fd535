//! Item service
//!
//! Create, list, update and delete over the `items` table. Every operation
//! runs in its own [`Session`](crate::store::Session) and commits only on
//! success; an early return drops the session, which rolls it back.

use crate::store::StoreConnector;
use crate::types::{Item, ItemId, ItemRequest, MessageResponse};
use crate::{Error, Result};

pub const DELETED_MESSAGE: &str = "Item deleted successfully";

#[derive(Debug, Clone)]
pub struct ItemService {
    store: StoreConnector,
}

impl ItemService {
    pub fn new(store: StoreConnector) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StoreConnector {
        &self.store
    }

    /// Insert a new item and return it with its store-assigned id.
    pub async fn create(&self, request: ItemRequest) -> Result<Item> {
        let mut session = self.store.acquire_session().await?;

        let item: Item = sqlx::query_as(
            "INSERT INTO items (name, description) VALUES ($1, $2) \
             RETURNING id, name, description",
        )
        .bind(request.name)
        .bind(request.description)
        .fetch_one(session.conn()?)
        .await?;

        session.commit().await?;

        tracing::debug!(id = item.id, "Created item");
        Ok(item)
    }

    /// All items, ordered by id.
    pub async fn list(&self) -> Result<Vec<Item>> {
        let mut session = self.store.acquire_session().await?;

        let items: Vec<Item> =
            sqlx::query_as("SELECT id, name, description FROM items ORDER BY id")
                .fetch_all(session.conn()?)
                .await?;

        session.commit().await?;
        Ok(items)
    }

    /// Overwrite name and description of an existing item.
    pub async fn update(&self, id: ItemId, request: ItemRequest) -> Result<Item> {
        let mut session = self.store.acquire_session().await?;

        let item: Option<Item> = sqlx::query_as(
            "UPDATE items SET name = $1, description = $2 WHERE id = $3 \
             RETURNING id, name, description",
        )
        .bind(request.name)
        .bind(request.description)
        .bind(id)
        .fetch_optional(session.conn()?)
        .await?;

        let item = item.ok_or(Error::NotFound(id))?;
        session.commit().await?;

        tracing::debug!(id, "Updated item");
        Ok(item)
    }

    /// Remove an item.
    pub async fn delete(&self, id: ItemId) -> Result<MessageResponse> {
        let mut session = self.store.acquire_session().await?;

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(session.conn()?)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }
        session.commit().await?;

        tracing::debug!(id, "Deleted item");
        Ok(MessageResponse::new(DELETED_MESSAGE))
    }
}
