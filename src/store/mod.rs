//! Persistence seam for fruit records.
//!
//! Handlers talk to a [`FruitStore`] trait object, never to a concrete
//! database client. `mongo` is the real backend; `memory` backs the test
//! suite and lets the server run without a database. Each operation is
//! independently atomic; the store makes no cross-operation guarantees, so a
//! delete-all followed by a bulk insert can be observed half-done.

pub mod memory;
pub mod mongo;

use crate::model::{Fruit, FruitFields};
use async_trait::async_trait;

pub use memory::MemoryFruitStore;
pub use mongo::MongoFruitStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// CRUD capability over the fruit collection.
///
/// Lookups by an id that does not resolve (including syntactically invalid
/// ids) yield `None`; deletes of a missing id succeed as no-ops.
#[async_trait]
pub trait FruitStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>>;

    /// Insert several records at once, returning them with their new ids.
    async fn create_many(&self, fields: Vec<FruitFields>) -> StoreResult<Vec<Fruit>>;

    async fn create_one(&self, fields: FruitFields) -> StoreResult<Fruit>;

    /// Full replace of the editable fields. Returns the updated record, or
    /// `None` when the id does not resolve. The id itself never changes.
    async fn replace_by_id(&self, id: &str, fields: FruitFields) -> StoreResult<Option<Fruit>>;

    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Remove every record, returning how many were deleted.
    async fn delete_all(&self) -> StoreResult<u64>;
}
