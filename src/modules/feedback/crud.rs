use crate::modules::feedback::model::Feedback;
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "feedback";

pub struct FeedbackCrud {
    collection: Collection<Feedback>,
}

impl FeedbackCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, feedback: &Feedback) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(feedback).await?;
        Ok(())
    }
}
