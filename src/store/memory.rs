use crate::model::{Fruit, FruitFields};
use crate::store::{FruitStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory fruit store. Backs the test suite and lets the server run
/// without a database; ids are random uuids instead of ObjectIds.
#[derive(Default)]
pub struct MemoryFruitStore {
    records: RwLock<Vec<Fruit>>,
}

impl MemoryFruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(fields: FruitFields) -> Fruit {
        Fruit {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            color: fields.color,
            ready_to_eat: fields.ready_to_eat,
        }
    }
}

#[async_trait]
impl FruitStore for MemoryFruitStore {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.iter().find(|f| f.id == id).cloned())
    }

    async fn create_many(&self, fields: Vec<FruitFields>) -> StoreResult<Vec<Fruit>> {
        let created: Vec<Fruit> = fields.into_iter().map(Self::build).collect();
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        guard.extend(created.iter().cloned());
        Ok(created)
    }

    async fn create_one(&self, fields: FruitFields) -> StoreResult<Fruit> {
        let created = Self::build(fields);
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        guard.push(created.clone());
        Ok(created)
    }

    async fn replace_by_id(&self, id: &str, fields: FruitFields) -> StoreResult<Option<Fruit>> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        match guard.iter_mut().find(|f| f.id == id) {
            Some(record) => {
                record.name = fields.name;
                record.color = fields.color;
                record.ready_to_eat = fields.ready_to_eat;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        guard.retain(|f| f.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        let deleted = guard.len() as u64;
        guard.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = MemoryFruitStore::new();
        let a = store
            .create_one(FruitFields::new("Orange", "orange", false))
            .await
            .unwrap();
        let b = store
            .create_one(FruitFields::new("Grape", "purple", true))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn replace_overwrites_all_fields_but_keeps_id() {
        let store = MemoryFruitStore::new();
        let fruit = store
            .create_one(FruitFields::new("Banana", "orange", false))
            .await
            .unwrap();

        let updated = store
            .replace_by_id(
                &fruit.id,
                FruitFields {
                    name: Some("Kiwi".into()),
                    color: None,
                    ready_to_eat: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, fruit.id);
        assert_eq!(updated.name.as_deref(), Some("Kiwi"));
        assert_eq!(updated.color, None);
        assert!(updated.ready_to_eat);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryFruitStore::new();
        let fruit = store
            .create_one(FruitFields::new("Coconut", "brown", false))
            .await
            .unwrap();

        store.delete_by_id(&fruit.id).await.unwrap();
        assert!(store.find_by_id(&fruit.id).await.unwrap().is_none());
        // second delete of the same id is a no-op, not an error
        store.delete_by_id(&fruit.id).await.unwrap();
    }

    #[tokio::test]
    async fn missing_id_lookups_yield_none() {
        let store = MemoryFruitStore::new();
        assert!(store.find_by_id("nope").await.unwrap().is_none());
        assert!(store
            .replace_by_id("nope", FruitFields::default())
            .await
            .unwrap()
            .is_none());
    }
}
