use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_owner, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::Folder,
        dto::{request::CreateFolderRequest, response::FolderWithCount},
    },
    repositories::{FolderRepository, FormRepository},
};

pub struct FolderService {
    folders: Arc<dyn FolderRepository>,
    forms: Arc<dyn FormRepository>,
}

impl FolderService {
    pub fn new(folders: Arc<dyn FolderRepository>, forms: Arc<dyn FormRepository>) -> Self {
        Self { folders, forms }
    }

    pub async fn create_folder(
        &self,
        request: CreateFolderRequest,
        claims: &Claims,
    ) -> AppResult<Folder> {
        request.validate()?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Folder name must not be blank".to_string(),
            ));
        }

        let folder = Folder::new(name, request.color.as_deref(), &claims.sub);
        self.folders.create(folder).await
    }

    pub async fn get_folder(&self, id: &str, claims: &Claims) -> AppResult<Folder> {
        let folder = self
            .folders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Folder with id '{}' not found", id)))?;

        require_owner(claims, &folder.created_by_user_id)?;
        Ok(folder)
    }

    pub async fn list_folders(&self, claims: &Claims) -> AppResult<Vec<FolderWithCount>> {
        let folders = self.folders.list_by_owner(&claims.sub).await?;

        let mut listed = Vec::with_capacity(folders.len());
        for folder in folders {
            let form_count = self.forms.list_by_folder(&folder.id).await?.len() as i64;
            listed.push(FolderWithCount { folder, form_count });
        }

        Ok(listed)
    }

    /// Deletes the folder. Its forms are kept and lose their folder association.
    pub async fn delete_folder(&self, id: &str, claims: &Claims) -> AppResult<()> {
        let folder = self.get_folder(id, claims).await?;

        let detached = self.forms.detach_folder(&folder.id).await?;
        self.folders.delete(&folder.id).await?;

        log::info!("Deleted folder {} ({} forms detached)", folder.id, detached);
        Ok(())
    }
}
