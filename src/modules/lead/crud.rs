use crate::modules::lead::model::Lead;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "leads";

pub struct LeadCrud {
    collection: Collection<Lead>,
}

impl LeadCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, lead: &Lead) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(lead).await?;
        Ok(())
    }

    pub async fn create_many(&self, leads: &[Lead]) -> Result<usize, mongodb::error::Error> {
        let result = self.collection.insert_many(leads).await?;
        Ok(result.inserted_ids.len())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Lead>, mongodb::error::Error> {
        self.collection.find_one(doc! { "id": id }).await
    }

    /// Newest first.
    pub async fn find_all(&self, shoot_type: Option<&str>, limit: i64) -> Result<Vec<Lead>, mongodb::error::Error> {
        let filter = match shoot_type {
            Some(shoot_type) => doc! { "shoot_type": shoot_type },
            None => doc! {},
        };

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "timestamp": -1, "_id": -1 })
            .limit(limit)
            .await?;

        cursor.try_collect().await
    }
}
