use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, FORMS_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::Form,
};

#[async_trait]
pub trait FormRepository: Send + Sync {
    async fn create(&self, form: Form) -> AppResult<Form>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Form>>;
    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Form>>;
    async fn list_by_folder(&self, folder_id: &str) -> AppResult<Vec<Form>>;
    async fn update(&self, form: Form) -> AppResult<Form>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn detach_folder(&self, folder_id: &str) -> AppResult<u64>;
    async fn increment_response_count(&self, id: &str) -> AppResult<()>;
}

pub struct MongoFormRepository {
    collection: Collection<Form>,
}

impl MongoFormRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(FORMS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for forms collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "createdByUserId": 1 })
            .options(IndexOptions::builder().name("owner".to_string()).build())
            .build();

        let folder_index = IndexModel::builder()
            .keys(doc! { "folderId": 1 })
            .options(IndexOptions::builder().name("folder".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_index).await?;
        self.collection.create_index(folder_index).await?;

        log::info!("Successfully created indexes for forms collection");
        Ok(())
    }
}

#[async_trait]
impl FormRepository for MongoFormRepository {
    async fn create(&self, form: Form) -> AppResult<Form> {
        self.collection.insert_one(&form).await?;
        Ok(form)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Form>> {
        let form = self.collection.find_one(doc! { "id": id }).await?;
        Ok(form)
    }

    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Form>> {
        let forms = self
            .collection
            .find(doc! { "createdByUserId": user_id })
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(forms)
    }

    async fn list_by_folder(&self, folder_id: &str) -> AppResult<Vec<Form>> {
        let forms = self
            .collection
            .find(doc! { "folderId": folder_id })
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(forms)
    }

    async fn update(&self, form: Form) -> AppResult<Form> {
        let result = self
            .collection
            .replace_one(doc! { "id": &form.id }, &form)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Form with id '{}' not found",
                form.id
            )));
        }

        Ok(form)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Form with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn detach_folder(&self, folder_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "folderId": folder_id },
                doc! { "$unset": { "folderId": Bson::Null } },
            )
            .await?;
        Ok(result.modified_count)
    }

    async fn increment_response_count(&self, id: &str) -> AppResult<()> {
        self.collection
            .update_one(doc! { "id": id }, doc! { "$inc": { "responseCount": 1 } })
            .await?;
        Ok(())
    }
}
