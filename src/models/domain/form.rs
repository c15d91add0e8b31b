use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::field::{FormField, QuestionField},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
    pub status: FormStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub created_by_user_id: String,
    #[serde(default)]
    pub response_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Draft,
    Published,
    Closed,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Draft => "draft",
            FormStatus::Published => "published",
            FormStatus::Closed => "closed",
        }
    }
}

/// Listing shape of a form, as returned by the folder endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responses: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub status: FormStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl Form {
    pub fn new_draft(title: &str, description: &str, created_by_user_id: &str) -> Self {
        Form {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            fields: Vec::new(),
            status: FormStatus::Draft,
            folder_id: None,
            created_by_user_id: created_by_user_id.to_string(),
            response_count: 0,
            view_count: 0,
            share_url: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn is_accepting_responses(&self) -> bool {
        self.status == FormStatus::Published
    }

    /// Question fields in form order.
    pub fn question_fields(&self) -> impl Iterator<Item = (&FormField, &QuestionField)> {
        self.fields
            .iter()
            .filter_map(|f| f.as_question().map(|q| (f, q)))
    }

    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn question_mut(&mut self, field_id: &str) -> AppResult<&mut QuestionField> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| AppError::NotFound(format!("Field '{}' not found", field_id)))?;

        field.as_question_mut().ok_or_else(|| {
            AppError::BadRequest(format!("Field '{}' is not a question field", field_id))
        })
    }

    pub fn validate_fields(&self) -> AppResult<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.id == field.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate field id '{}'",
                    field.id
                )));
            }
            if let Some(question) = field.as_question() {
                question.validate()?;
            }
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }

    pub fn to_item(&self) -> FormItem {
        FormItem {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            responses: self.response_count,
            views: self.view_count,
            created_at: self.created_at,
            status: self.status,
            share_url: self.share_url.clone(),
            folder_id: self.folder_id.clone(),
        }
    }
}
