use crate::modules::chat::model::Message;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "messages";

/// Cap for history returned to clients.
pub const HISTORY_LIMIT: i64 = 1000;
/// Cap for turns forwarded to the provider with each completion.
pub const CONTEXT_LIMIT: i64 = 100;

pub struct MessageCrud {
    collection: Collection<Message>,
}

impl MessageCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, message: &Message) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(message).await?;
        Ok(())
    }

    /// Oldest-first, truncated to `limit`. `_id` breaks ties between turns
    /// written within the same millisecond.
    pub async fn find_by_session(&self, session_id: &str, limit: i64) -> Result<Vec<Message>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! { "session_id": session_id })
            .sort(doc! { "timestamp": 1, "_id": 1 })
            .limit(limit)
            .await?;

        cursor.try_collect().await
    }

    /// The last `limit` turns of a session, returned oldest-first.
    pub async fn find_recent(&self, session_id: &str, limit: i64) -> Result<Vec<Message>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! { "session_id": session_id })
            .sort(doc! { "timestamp": -1, "_id": -1 })
            .limit(limit)
            .await?;

        let mut messages: Vec<Message> = cursor.try_collect().await?;
        messages.reverse();
        Ok(messages)
    }
}
