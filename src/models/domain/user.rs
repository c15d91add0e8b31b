use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::Claims;

pub const DEFAULT_ROLE: &str = "user";

/// Simplified view of the identity provider's user handed to the rest of the app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub preferences: UserPreferences,
        pub created_at: Option<DateTime<Utc>>,
        pub last_login: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: String,
    pub notifications: bool,
    pub language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            notifications: true,
            language: "en".to_string(),
        }
    }
}

impl AppUser {
    pub fn from_claims(claims: &Claims) -> Self {
        let email = claims.primary_email().map(str::to_string);
        let full_name = format!(
            "{} {}",
            claims.first_name.as_deref().unwrap_or(""),
            claims.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        let name = if full_name.is_empty() {
            email.clone().unwrap_or_default()
        } else {
            full_name
        };

        AppUser {
            id: claims.sub.clone(),
            name,
            email,
            avatar: claims.image_url.clone(),
            role: DEFAULT_ROLE.to_string(),
            preferences: UserPreferences::default(),
            created_at: claims.created_at_utc(),
            last_login: claims.last_sign_in_at_utc(),
        }
    }
}

/// Upper-cased initials of the name parts, falling back to the email's first
/// letter and finally to `U`.
pub fn initials(claims: Option<&Claims>) -> String {
    let Some(claims) = claims else {
        return "U".to_string();
    };

    let first = claims.first_name.as_deref().and_then(|s| s.chars().next());
    let last = claims.last_name.as_deref().and_then(|s| s.chars().next());
    let from_name: String = first.into_iter().chain(last).collect::<String>().to_uppercase();
    if !from_name.is_empty() {
        return from_name;
    }

    claims
        .primary_email()
        .and_then(|e| e.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> Claims {
        Claims {
            sub: "user_123".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email_addresses: email.map(|e| vec![e.to_string()]).unwrap_or_default(),
            image_url: Some("https://img.example.com/a.png".to_string()),
            created_at: Some(1_700_000_000_000),
            last_sign_in_at: None,
            iss: None,
            exp: 9_999_999_999,
            iat: 0,
        }
    }

    #[test]
    fn app_user_has_fixed_role_and_default_preferences() {
        let user = AppUser::from_claims(&claims(Some("Ada"), Some("Lovelace"), Some("ada@example.com")));

        assert_eq!(user.id, "user_123");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.role, "user");
        assert_eq!(user.preferences, UserPreferences::default());
        assert!(user.created_at.is_some());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn app_user_name_falls_back_to_email() {
        let user = AppUser::from_claims(&claims(None, None, Some("ada@example.com")));
        assert_eq!(user.name, "ada@example.com");
    }

    #[test]
    fn initials_fallback_chain() {
        assert_eq!(initials(Some(&claims(Some("ada"), Some("lovelace"), None))), "AL");
        assert_eq!(initials(Some(&claims(None, None, Some("zed@example.com")))), "Z");
        assert_eq!(initials(Some(&claims(None, None, None))), "U");
        assert_eq!(initials(None), "U");
    }
}
