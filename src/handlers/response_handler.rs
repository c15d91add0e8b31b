use actix_web::{get, http::header::USER_AGENT, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthenticatedUser, OptionalUser},
    errors::AppError,
    models::{
        domain::SubmitterInfo,
        dto::{
            request::{PaginationParams, SubmitResponseRequest},
            response::PaginatedResponse,
        },
    },
};

fn submitter_info(req: &HttpRequest) -> SubmitterInfo {
    SubmitterInfo {
        ip: req.connection_info().realip_remote_addr().map(str::to_string),
        user_agent: req
            .headers()
            .get(USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string),
        ..SubmitterInfo::default()
    }
}

#[post("/api/forms/{form_id}/responses")]
async fn submit_response(
    state: web::Data<AppState>,
    form_id: web::Path<String>,
    request: web::Json<SubmitResponseRequest>,
    user: OptionalUser,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let response = state
        .response_service
        .submit(
            &form_id,
            request.into_inner(),
            submitter_info(&req),
            user.0.as_ref(),
        )
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/forms/{form_id}/responses")]
async fn list_responses(
    state: web::Data<AppState>,
    form_id: web::Path<String>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let (items, total) = state
        .response_service
        .list_responses(&form_id, pagination.offset(), pagination.limit(), &auth.0)
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse {
        items,
        total,
        offset: pagination.offset(),
        limit: pagination.limit(),
    }))
}

#[get("/api/forms/{form_id}/responses/{response_id}")]
async fn get_response(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (form_id, response_id) = path.into_inner();
    let response = state
        .response_service
        .get_response(&form_id, &response_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/forms/{form_id}/responses/{response_id}/results")]
async fn get_test_results(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (form_id, response_id) = path.into_inner();
    let report = state
        .response_service
        .test_results(&form_id, &response_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(report))
}

#[get("/api/forms/{form_id}/results")]
async fn get_aggregate_results(
    state: web::Data<AppState>,
    form_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let report = state
        .response_service
        .aggregate_results(&form_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(report))
}
