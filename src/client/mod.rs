//! Typed client for the forms API and the folder contents view it drives.

use reqwest::{header::AUTHORIZATION, StatusCode};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{Folder, FormItem},
        dto::response::{ApiErrorBody, FolderFormsResponse},
        folder_contents::FolderContents,
    },
};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load forms";

#[derive(Clone)]
pub struct FormsApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl FormsApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.forms_api_base_url)
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn folder_forms_url(&self, folder_id: &str) -> String {
        format!("{}/api/forms/folder/{}", self.base_url, folder_id)
    }

    /// `GET /api/forms/folder/{folder_id}`. Non-success statuses surface the
    /// server's `error` message when the body carries one; transport and
    /// decode failures collapse to [`FETCH_FAILED_MESSAGE`].
    pub async fn get_folder_forms(&self, folder_id: &str) -> AppResult<Vec<FormItem>> {
        let mut request = self.http.get(self.folder_forms_url(folder_id));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(fetch_failed)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body: FolderFormsResponse = response.json().await.map_err(fetch_failed)?;
        Ok(body.forms)
    }
}

fn fetch_failed(err: reqwest::Error) -> AppError {
    log::warn!("Folder forms request failed: {}", err);
    AppError::InternalError(FETCH_FAILED_MESSAGE.to_string())
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| FETCH_FAILED_MESSAGE.to_string());

    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        _ => AppError::InternalError(message),
    }
}

/// Message shown inline when a folder fetch fails.
pub fn fetch_error_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(msg)
        | AppError::Unauthorized(msg)
        | AppError::Forbidden(msg)
        | AppError::InternalError(msg)
            if !msg.is_empty() =>
        {
            msg.clone()
        }
        _ => FETCH_FAILED_MESSAGE.to_string(),
    }
}

/// Handle for one in-flight folder fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State of the folder contents screen: the open folder, loading and error
/// flags, and the filtered/paginated listing.
///
/// Each fetch is stamped with a generation; a result arriving after another
/// fetch has started is dropped.
#[derive(Debug, Default)]
pub struct FolderContentsView {
    folder: Option<Folder>,
    contents: FolderContents,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl FolderContentsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(&self) -> Option<&Folder> {
        self.folder.as_ref()
    }

    pub fn contents(&self) -> &FolderContents {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut FolderContents {
        &mut self.contents
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opens `folder`, clearing the previous listing and search.
    pub fn begin_fetch(&mut self, folder: Folder) -> FetchTicket {
        self.generation += 1;
        self.folder = Some(folder);
        self.loading = true;
        self.error = None;
        self.contents = FolderContents::default();
        FetchTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: AppResult<Vec<FormItem>>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping stale folder fetch #{}", ticket.0);
            return false;
        }

        self.loading = false;
        match result {
            Ok(forms) => self.contents.set_forms(forms),
            Err(err) => {
                log::warn!("Folder fetch failed: {}", err);
                self.error = Some(fetch_error_message(&err));
                self.contents.set_forms(Vec::new());
            }
        }
        true
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.folder = None;
        self.loading = false;
        self.error = None;
        self.contents = FolderContents::default();
    }

    pub async fn load(&mut self, client: &FormsApiClient, folder: Folder) -> bool {
        let folder_id = folder.id.clone();
        let ticket = self.begin_fetch(folder);
        let result = client.get_folder_forms(&folder_id).await;
        self.finish_fetch(ticket, result)
    }
}
