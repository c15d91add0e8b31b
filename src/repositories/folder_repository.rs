use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, FOLDERS_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::Folder,
};

#[async_trait]
pub trait FolderRepository: Send + Sync {
    async fn create(&self, folder: Folder) -> AppResult<Folder>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Folder>>;
    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Folder>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoFolderRepository {
    collection: Collection<Folder>,
}

impl MongoFolderRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(FOLDERS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
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

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_index).await?;

        log::info!("Successfully created indexes for folders collection");
        Ok(())
    }
}

#[async_trait]
impl FolderRepository for MongoFolderRepository {
    async fn create(&self, folder: Folder) -> AppResult<Folder> {
        self.collection.insert_one(&folder).await?;
        Ok(folder)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Folder>> {
        let folder = self.collection.find_one(doc! { "id": id }).await?;
        Ok(folder)
    }

    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Folder>> {
        let cursor = self
            .collection
            .find(doc! { "createdByUserId": user_id })
            .sort(doc! { "name": 1 })
            .await?;
        let folders: Vec<Folder> = cursor.try_collect().await?;
        Ok(folders)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Folder with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
