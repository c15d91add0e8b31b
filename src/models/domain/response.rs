use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One stored submission against a form. Never mutated after insert.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    #[serde(default)]
    pub responses: Vec<FieldAnswer>,
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub submitter_info: SubmitterInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<f64>,
    #[serde(default = "default_true")]
    pub is_complete: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnswer {
    pub field_id: String,
    pub field_label: String,
    pub field_type: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitterInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub saved_to_account: bool,
}

fn default_true() -> bool {
    true
}

impl FormResponse {
    pub fn new(form_id: &str, responses: Vec<FieldAnswer>, submitter_info: SubmitterInfo) -> Self {
        FormResponse {
            id: Uuid::new_v4().to_string(),
            form_id: form_id.to_string(),
            responses,
            submitted_at: Utc::now(),
            submitter_info,
            completion_time: None,
            is_complete: true,
        }
    }

    pub fn answer_for(&self, field_id: &str) -> Option<&FieldAnswer> {
        self.responses.iter().find(|a| a.field_id == field_id)
    }
}

impl FieldAnswer {
    /// Option ids carried by the answer value. A bare string counts as one id;
    /// any other shape is treated as no answer.
    pub fn selected_option_ids(&self) -> Vec<String> {
        match &self.value {
            Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Value::String(id) if !id.is_empty() => vec![id.clone()],
            _ => Vec::new(),
        }
    }
}
