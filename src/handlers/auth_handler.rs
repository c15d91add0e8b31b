use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{
        domain::{user::initials, AppUser},
        dto::response::AuthScreensConfig,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: AppUser,
    pub initials: String,
}

/// Where the hosted sign-in and sign-up screens live and where they return to.
#[get("/auth/config")]
async fn auth_config(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config;
    HttpResponse::Ok().json(AuthScreensConfig {
        sign_in_url: config.idp_sign_in_url.clone(),
        sign_up_url: config.idp_sign_up_url.clone(),
        after_auth_redirect: config.after_auth_redirect.clone(),
    })
}

#[get("/api/me")]
async fn me(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let claims = auth.0;
    log::debug!("Resolved current user {}", claims.sub);

    Ok(HttpResponse::Ok().json(MeResponse {
        initials: initials(Some(&claims)),
        user: AppUser::from_claims(&claims),
    }))
}
