use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_FOLDER_COLOR: &str = "#3B82F6";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_by_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Folder {
    pub fn new(name: &str, color: Option<&str>, created_by_user_id: &str) -> Self {
        Folder {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            color: color.unwrap_or(DEFAULT_FOLDER_COLOR).to_string(),
            created_by_user_id: created_by_user_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
