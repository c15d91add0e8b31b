use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::CreateFolderRequest, response::DeleteResponse},
};

#[get("/api/folders")]
async fn list_folders(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let folders = state.folder_service.list_folders(&auth.0).await?;
    Ok(HttpResponse::Ok().json(folders))
}

#[post("/api/folders")]
async fn create_folder(
    state: web::Data<AppState>,
    request: web::Json<CreateFolderRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let folder = state
        .folder_service
        .create_folder(request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(folder))
}

#[get("/api/folders/{id}")]
async fn get_folder(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let folder = state.folder_service.get_folder(&id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(folder))
}

#[delete("/api/folders/{id}")]
async fn delete_folder(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.folder_service.delete_folder(&id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Folder '{}' deleted", id),
    }))
}
