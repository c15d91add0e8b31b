use std::env;
use secrecy::SecretString;

const DEFAULT_IDP_SECRET: &str = "dev_identity_secret_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub idp_jwt_secret: SecretString,
    pub idp_issuer: Option<String>,
    pub idp_sign_in_url: String,
    pub idp_sign_up_url: String,
    pub after_auth_redirect: String,
    pub cors_allowed_origin: String,
    pub forms_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "formcraft-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            idp_jwt_secret: SecretString::from(
                env::var("IDP_JWT_SECRET").unwrap_or_else(|_| DEFAULT_IDP_SECRET.to_string()),
            ),
            idp_issuer: env::var("IDP_ISSUER").ok().filter(|s| !s.trim().is_empty()),
            idp_sign_in_url: env::var("IDP_SIGN_IN_URL")
                .unwrap_or_else(|_| "/sign-in".to_string()),
            idp_sign_up_url: env::var("IDP_SIGN_UP_URL")
                .unwrap_or_else(|_| "/sign-up".to_string()),
            after_auth_redirect: env::var("AFTER_AUTH_REDIRECT")
                .unwrap_or_else(|_| "/dashboard".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            forms_api_base_url: env::var("FORMS_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }

    /// Validate that production-critical configuration is set.
    /// Panics if the identity provider secret is left at its default.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let secret = self.idp_jwt_secret.expose_secret();

        if secret == DEFAULT_IDP_SECRET {
            panic!(
                "FATAL: IDP_JWT_SECRET is using default value! Set IDP_JWT_SECRET to the identity provider signing secret."
            );
        }

        if secret.len() < 32 {
            panic!(
                "FATAL: IDP_JWT_SECRET is too short ({}). Must be at least 32 characters.",
                secret.len()
            );
        }

        if self.idp_issuer.is_none() {
            panic!("FATAL: IDP_ISSUER must be set in production.");
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "formcraft-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            idp_jwt_secret: SecretString::from("test_identity_secret_key".to_string()),
            idp_issuer: None,
            idp_sign_in_url: "/sign-in".to_string(),
            idp_sign_up_url: "/sign-up".to_string(),
            after_auth_redirect: "/dashboard".to_string(),
            cors_allowed_origin: "http://localhost:5173".to_string(),
            forms_api_base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}
