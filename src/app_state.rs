use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        FolderRepository, FormRepository, MongoFolderRepository, MongoFormRepository,
        MongoResponseRepository, ResponseRepository,
    },
    services::{
        folder_service::FolderService, form_service::FormService,
        response_service::ResponseService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub form_service: Arc<FormService>,
    pub folder_service: Arc<FolderService>,
    pub response_service: Arc<ResponseService>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let form_repository = Arc::new(MongoFormRepository::new(&db));
        form_repository.ensure_indexes().await?;
        let folder_repository = Arc::new(MongoFolderRepository::new(&db));
        folder_repository.ensure_indexes().await?;
        let response_repository = Arc::new(MongoResponseRepository::new(&db));
        response_repository.ensure_indexes().await?;

        let mut state = Self::from_repositories(
            config,
            form_repository,
            folder_repository,
            response_repository,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires services over any repository implementation.
    pub fn from_repositories(
        config: Config,
        forms: Arc<dyn FormRepository>,
        folders: Arc<dyn FolderRepository>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        let jwt_service = JwtService::new(&config.idp_jwt_secret, config.idp_issuer.as_deref());

        Self {
            form_service: Arc::new(FormService::new(
                forms.clone(),
                folders.clone(),
                responses.clone(),
            )),
            folder_service: Arc::new(FolderService::new(folders, forms.clone())),
            response_service: Arc::new(ResponseService::new(responses, forms)),
            jwt_service,
            config: Arc::new(config),
            db: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
