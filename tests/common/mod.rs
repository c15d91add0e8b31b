#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use formcraft_server::{
    app_state::AppState,
    auth::Claims,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        FieldKind, Folder, Form, FormField, FormResponse, FormStatus, QuestionField,
        QuestionMode, QuestionOption,
    },
    repositories::{FolderRepository, FormRepository, ResponseRepository},
};

pub struct InMemoryFormRepository {
    pub forms: Arc<RwLock<HashMap<String, Form>>>,
}

impl InMemoryFormRepository {
    pub fn new() -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn newest_first(items: &mut [Form]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl FormRepository for InMemoryFormRepository {
    async fn create(&self, form: Form) -> AppResult<Form> {
        let mut forms = self.forms.write().await;
        if forms.contains_key(&form.id) {
            return Err(AppError::AlreadyExists(format!(
                "Form with id '{}' already exists",
                form.id
            )));
        }
        forms.insert(form.id.clone(), form.clone());
        Ok(form)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Form>> {
        Ok(self.forms.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Form>> {
        let forms = self.forms.read().await;
        let mut items: Vec<Form> = forms
            .values()
            .filter(|f| f.created_by_user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut items);
        Ok(items)
    }

    async fn list_by_folder(&self, folder_id: &str) -> AppResult<Vec<Form>> {
        let forms = self.forms.read().await;
        let mut items: Vec<Form> = forms
            .values()
            .filter(|f| f.folder_id.as_deref() == Some(folder_id))
            .cloned()
            .collect();
        newest_first(&mut items);
        Ok(items)
    }

    async fn update(&self, form: Form) -> AppResult<Form> {
        let mut forms = self.forms.write().await;
        match forms.get_mut(&form.id) {
            Some(existing) => {
                *existing = form.clone();
                Ok(form)
            }
            None => Err(AppError::NotFound(format!(
                "Form with id '{}' not found",
                form.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.forms
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Form with id '{}' not found", id)))
    }

    async fn detach_folder(&self, folder_id: &str) -> AppResult<u64> {
        let mut forms = self.forms.write().await;
        let mut detached = 0;
        for form in forms.values_mut() {
            if form.folder_id.as_deref() == Some(folder_id) {
                form.folder_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }

    async fn increment_response_count(&self, id: &str) -> AppResult<()> {
        let mut forms = self.forms.write().await;
        let form = forms
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Form with id '{}' not found", id)))?;
        form.response_count += 1;
        Ok(())
    }
}

pub struct InMemoryFolderRepository {
    pub folders: Arc<RwLock<HashMap<String, Folder>>>,
}

impl InMemoryFolderRepository {
    pub fn new() -> Self {
        Self {
            folders: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FolderRepository for InMemoryFolderRepository {
    async fn create(&self, folder: Folder) -> AppResult<Folder> {
        self.folders
            .write()
            .await
            .insert(folder.id.clone(), folder.clone());
        Ok(folder)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Folder>> {
        Ok(self.folders.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, user_id: &str) -> AppResult<Vec<Folder>> {
        let folders = self.folders.read().await;
        let mut items: Vec<Folder> = folders
            .values()
            .filter(|f| f.created_by_user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.folders
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Folder with id '{}' not found", id)))
    }
}

pub struct InMemoryResponseRepository {
    pub responses: Arc<RwLock<Vec<FormResponse>>>,
}

impl InMemoryResponseRepository {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ResponseRepository for InMemoryResponseRepository {
    async fn create(&self, response: FormResponse) -> AppResult<FormResponse> {
        self.responses.write().await.push(response.clone());
        Ok(response)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<FormResponse>> {
        let responses = self.responses.read().await;
        Ok(responses.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_form(&self, form_id: &str) -> AppResult<Vec<FormResponse>> {
        let responses = self.responses.read().await;
        Ok(responses
            .iter()
            .rev()
            .filter(|r| r.form_id == form_id)
            .cloned()
            .collect())
    }

    async fn list_by_form(
        &self,
        form_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<FormResponse>, i64)> {
        let items = self.find_by_form(form_id).await?;
        let total = items.len() as i64;

        let page = items
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok((page, total))
    }

    async fn delete_by_form(&self, form_id: &str) -> AppResult<u64> {
        let mut responses = self.responses.write().await;
        let before = responses.len();
        responses.retain(|r| r.form_id != form_id);
        Ok((before - responses.len()) as u64)
    }
}

pub struct Repositories {
    pub forms: Arc<InMemoryFormRepository>,
    pub folders: Arc<InMemoryFolderRepository>,
    pub responses: Arc<InMemoryResponseRepository>,
}

impl Repositories {
    pub fn new() -> Self {
        Self {
            forms: Arc::new(InMemoryFormRepository::new()),
            folders: Arc::new(InMemoryFolderRepository::new()),
            responses: Arc::new(InMemoryResponseRepository::new()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::from_repositories(
            test_config(),
            self.forms.clone(),
            self.folders.clone(),
            self.responses.clone(),
        )
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "formcraft-integration".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        idp_jwt_secret: SecretString::from("integration_identity_secret_key".to_string()),
        idp_issuer: None,
        idp_sign_in_url: "/sign-in".to_string(),
        idp_sign_up_url: "/sign-up".to_string(),
        after_auth_redirect: "/dashboard".to_string(),
        cors_allowed_origin: "http://localhost:5173".to_string(),
        forms_api_base_url: "http://127.0.0.1:8080".to_string(),
    }
}

pub fn claims_for(user_id: &str) -> Claims {
    Claims::new(user_id, &format!("{}@example.com", user_id), 1)
}

fn option(id: &str, text: &str, is_correct: bool) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        text: text.to_string(),
        is_correct,
    }
}

/// Published two-question quiz: `q1` single (`q1-a` correct), `q2` multiple
/// (`q2-b` and `q2-c` correct).
pub fn published_quiz(owner: &str) -> Form {
    let mut q1 = QuestionField::new("2 + 2?", QuestionMode::Single);
    q1.options = vec![option("q1-a", "4", true), option("q1-b", "5", false)];

    let mut q2 = QuestionField::new("Primes?", QuestionMode::Multiple);
    q2.options = vec![
        option("q2-a", "4", false),
        option("q2-b", "5", true),
        option("q2-c", "7", true),
    ];

    let mut first = FormField::new("Arithmetic", FieldKind::Question(q1));
    first.id = "q1".to_string();
    let mut second = FormField::new("Primes", FieldKind::Question(q2));
    second.id = "q2".to_string();

    let mut form = Form::new_draft("Maths quiz", "", owner);
    form.status = FormStatus::Published;
    form.fields = vec![first, second];
    form
}
