use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{
            CreateFormRequest, DashboardQuery, MoveFormRequest, OptionTextRequest,
            QuestionModeRequest, UpdateFormRequest,
        },
        response::{DeleteResponse, FolderFormsResponse},
    },
};

#[get("/api/forms")]
async fn list_forms(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let forms = state.form_service.dashboard_forms(&query, &auth.0).await?;
    Ok(HttpResponse::Ok().json(FolderFormsResponse { forms }))
}

#[post("/api/forms")]
async fn create_form(
    state: web::Data<AppState>,
    request: web::Json<CreateFormRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let form = state
        .form_service
        .create_form(request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(form))
}

#[get("/api/forms/folder/{folder_id}")]
async fn get_folder_forms(
    state: web::Data<AppState>,
    folder_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let forms = state.form_service.folder_forms(&folder_id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(FolderFormsResponse { forms }))
}

#[get("/api/forms/{id}")]
async fn get_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let form = state.form_service.get_owned_form(&id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(form))
}

#[put("/api/forms/{id}")]
async fn update_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateFormRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let form = state
        .form_service
        .update_form(&id, request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(form))
}

#[put("/api/forms/{id}/folder")]
async fn move_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<MoveFormRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let form = state
        .form_service
        .move_form(&id, request.into_inner().folder_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(form))
}

#[delete("/api/forms/{id}")]
async fn delete_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.form_service.delete_form(&id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Form '{}' deleted", id),
    }))
}

#[post("/api/forms/{form_id}/fields/{field_id}/options")]
async fn add_option(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<OptionTextRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (form_id, field_id) = path.into_inner();
    let option = state
        .form_service
        .add_option(&form_id, &field_id, &request.text, &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(option))
}

#[put("/api/forms/{form_id}/fields/{field_id}/options/{option_id}")]
async fn edit_option(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    request: web::Json<OptionTextRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (form_id, field_id, option_id) = path.into_inner();
    let question = state
        .form_service
        .edit_option_text(&form_id, &field_id, &option_id, &request.text, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/api/forms/{form_id}/fields/{field_id}/options/{option_id}")]
async fn delete_option(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (form_id, field_id, option_id) = path.into_inner();
    let question = state
        .form_service
        .delete_option(&form_id, &field_id, &option_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/forms/{form_id}/fields/{field_id}/options/{option_id}/toggle")]
async fn toggle_option(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (form_id, field_id, option_id) = path.into_inner();
    let question = state
        .form_service
        .toggle_correct(&form_id, &field_id, &option_id, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[put("/api/forms/{form_id}/fields/{field_id}/mode")]
async fn set_question_mode(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<QuestionModeRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (form_id, field_id) = path.into_inner();
    let question = state
        .form_service
        .set_question_mode(&form_id, &field_id, request.mode, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}
