use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Folder, FormItem};

/// Body of `GET /api/forms/folder/{folder_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderFormsResponse {
    pub forms: Vec<FormItem>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct FolderWithCount {
    pub folder: Folder,
    pub form_count: i64,
}

#[derive(Debug, Serialize, SimpleObject)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

/// Configuration for the hosted sign-in and sign-up screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthScreensConfig {
    pub sign_in_url: String,
    pub sign_up_url: String,
    pub after_auth_redirect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
