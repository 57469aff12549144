use crate::model::{Fruit, FruitFields};
use crate::store::{FruitStore, StoreResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "fruits";

/// Wire shape of a fruit document in MongoDB. Kept separate from the
/// [`Fruit`] model so the `_id`/`ObjectId` details stay inside this backend.
#[derive(Debug, Serialize, Deserialize)]
struct FruitDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(rename = "readyToEat")]
    ready_to_eat: bool,
}

impl FruitDocument {
    fn from_fields(fields: FruitFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            color: fields.color,
            ready_to_eat: fields.ready_to_eat,
        }
    }

    fn into_fruit(self) -> Fruit {
        Fruit {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            color: self.color,
            ready_to_eat: self.ready_to_eat,
        }
    }
}

/// MongoDB-backed fruit store.
pub struct MongoFruitStore {
    fruits: Collection<FruitDocument>,
}

impl MongoFruitStore {
    /// Connect to the database and verify the connection with a ping.
    /// Connection open/error events are logged here; there is no separate
    /// lifecycle beyond process termination.
    pub async fn connect(database_url: &str, database_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(database_url).await.inspect_err(|e| {
            tracing::error!(error = %e, "mongodb connection failed");
        })?;
        let db = client.database(database_name);
        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = database_name, "mongodb connected");

        Ok(Self {
            fruits: db.collection(COLLECTION),
        })
    }

    /// An unparseable id can never match a stored document, so it behaves
    /// like a lookup miss rather than an error.
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }
}

#[async_trait]
impl FruitStore for MongoFruitStore {
    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        let docs: Vec<FruitDocument> = self.fruits.find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(FruitDocument::into_fruit).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };
        let doc = self.fruits.find_one(doc! { "_id": oid }).await?;
        Ok(doc.map(FruitDocument::into_fruit))
    }

    async fn create_many(&self, fields: Vec<FruitFields>) -> StoreResult<Vec<Fruit>> {
        let mut docs: Vec<FruitDocument> =
            fields.into_iter().map(FruitDocument::from_fields).collect();
        if docs.is_empty() {
            return Ok(Vec::new());
        }

        let result = self.fruits.insert_many(&docs).await?;
        for (index, inserted_id) in result.inserted_ids {
            if let Bson::ObjectId(oid) = inserted_id {
                docs[index].id = Some(oid);
            }
        }
        Ok(docs.into_iter().map(FruitDocument::into_fruit).collect())
    }

    async fn create_one(&self, fields: FruitFields) -> StoreResult<Fruit> {
        let mut doc = FruitDocument::from_fields(fields);
        let result = self.fruits.insert_one(&doc).await?;
        if let Bson::ObjectId(oid) = result.inserted_id {
            doc.id = Some(oid);
        }
        Ok(doc.into_fruit())
    }

    async fn replace_by_id(&self, id: &str, fields: FruitFields) -> StoreResult<Option<Fruit>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };
        let mut replacement = FruitDocument::from_fields(fields);
        replacement.id = Some(oid);

        let updated = self
            .fruits
            .find_one_and_replace(doc! { "_id": oid }, replacement)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(FruitDocument::into_fruit))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(());
        };
        self.fruits.delete_one(doc! { "_id": oid }).await?;
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = self.fruits.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_parses_to_none() {
        assert!(MongoFruitStore::parse_id("not-an-object-id").is_none());
        assert!(MongoFruitStore::parse_id("").is_none());
        let oid = ObjectId::new();
        assert_eq!(MongoFruitStore::parse_id(&oid.to_hex()), Some(oid));
    }

    #[test]
    fn document_round_trips_to_model() {
        let oid = ObjectId::new();
        let doc = FruitDocument {
            id: Some(oid),
            name: Some("Grape".into()),
            color: Some("purple".into()),
            ready_to_eat: true,
        };
        let fruit = doc.into_fruit();
        assert_eq!(fruit.id, oid.to_hex());
        assert!(fruit.ready_to_eat);
    }

    #[test]
    fn document_serializes_ready_flag_in_camel_case() {
        let doc = FruitDocument::from_fields(FruitFields::new("Banana", "orange", false));
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(bson.get("_id").is_none());
        assert_eq!(bson.get_bool("readyToEat").unwrap(), false);
    }
}
