use async_graphql::InputObject;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::{
    dashboard::DashboardState,
    domain::{FieldAnswer, FormField, FormStatus, QuestionMode},
};

fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub status: Option<FormStatus>,

    pub fields: Option<Vec<FormField>>,
}

#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct MoveFormRequest {
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct OptionTextRequest {
    #[validate(length(max = 500))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionModeRequest {
    pub mode: QuestionMode,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    #[validate(length(min = 1))]
    pub responses: Vec<FieldAnswer>,

    #[validate(range(min = 0.0))]
    pub completion_time: Option<f64>,

    pub is_complete: Option<bool>,

    pub location: Option<String>,

    #[serde(default)]
    pub save_to_account: bool,
}

/// Query string of the dashboard listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub show_drafts: Option<bool>,
    pub show_published: Option<bool>,
    pub folder_id: Option<String>,
}

impl DashboardQuery {
    pub fn to_state(&self) -> DashboardState {
        let defaults = DashboardState::default();
        DashboardState {
            search_term: self.search.clone().unwrap_or_default(),
            show_drafts: self.show_drafts.unwrap_or(defaults.show_drafts),
            show_published: self.show_published.unwrap_or(defaults.show_published),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_create_folder_request() {
        let request = CreateFolderRequest {
            name: "Quizzes".to_string(),
            color: Some("#10B981".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_folder_color() {
        let request = CreateFolderRequest {
            name: "Quizzes".to_string(),
            color: Some("green".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_form_title_rejected() {
        let request = CreateFormRequest {
            title: "".to_string(),
            description: None,
            folder_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_submit_requires_answers() {
        let request = SubmitResponseRequest {
            responses: vec![],
            completion_time: Some(12.0),
            is_complete: None,
            location: None,
            save_to_account: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_dashboard_query_defaults() {
        let state = DashboardQuery {
            show_drafts: Some(false),
            ..Default::default()
        }
        .to_state();

        assert!(!state.show_drafts);
        assert!(state.show_published);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn test_pagination_clamps() {
        let params = PaginationParams {
            offset: Some(-5),
            limit: Some(1000),
        };
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 100);
    }
}
