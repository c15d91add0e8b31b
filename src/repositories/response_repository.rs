use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, RESPONSES_COLLECTION},
    errors::AppResult,
    models::domain::FormResponse,
};

#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn create(&self, response: FormResponse) -> AppResult<FormResponse>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormResponse>>;
    async fn find_by_form(&self, form_id: &str) -> AppResult<Vec<FormResponse>>;
    async fn list_by_form(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<FormResponse>, i64)>;
    async fn delete_by_form(&self, form_id: &str) -> AppResult<u64>;
}

pub struct MongoResponseRepository {
    collection: Collection<FormResponse>,
}

impl MongoResponseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(RESPONSES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for responses collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let form_index = IndexModel::builder()
            .keys(doc! { "formId": 1, "submittedAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("form_submitted".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(form_index).await?;

        log::info!("Successfully created indexes for responses collection");
        Ok(())
    }
}

#[async_trait]
impl ResponseRepository for MongoResponseRepository {
    async fn create(&self, response: FormResponse) -> AppResult<FormResponse> {
        self.collection.insert_one(&response).await?;
        Ok(response)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormResponse>> {
        let response = self.collection.find_one(doc! { "id": id }).await?;
        Ok(response)
    }

    async fn find_by_form(&self, form_id: &str) -> AppResult<Vec<FormResponse>> {
        let responses = self
            .collection
            .find(doc! { "formId": form_id })
            .sort(doc! { "submittedAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(responses)
    }

    async fn list_by_form(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<FormResponse>, i64)> {
        let filter = doc! { "formId": form_id };

        let total = self.collection.count_documents(filter.clone()).await?;

        let responses = self
            .collection
            .find(filter)
            .skip(offset as u64)
            .limit(limit)
            .sort(doc! { "submittedAt": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((responses, total as i64))
    }

    async fn delete_by_form(&self, form_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "formId": form_id })
            .await?;
        Ok(result.deleted_count)
    }
}
