use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::access::projects;
use crate::auth::RequireUser;
use crate::server::AppState;
use crate::server::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use crate::server::response::{ApiError, ApiJson, ApiResponse};

pub async fn list_projects(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let projects = projects::list_projects(state.store.as_ref(), &auth.user.id)?;
    let responses: Vec<ProjectResponse> = projects.into_iter().map(ProjectResponse::from).collect();

    Ok::<_, ApiError>(Json(ApiResponse::success(responses)))
}

pub async fn create_project(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> impl IntoResponse {
    let created = projects::create_project(state.store.as_ref(), &auth.user.id, &req.name, Utc::now())?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiResponse::success(ProjectResponse::from(created))),
    ))
}

pub async fn get_project(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let project = projects::get_project(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(ProjectResponse::from(project))))
}

pub async fn rename_project(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> impl IntoResponse {
    let project = projects::rename_project(state.store.as_ref(), &auth.user.id, id, &req.name)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(project)))
}

pub async fn delete_project(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    projects::delete_project(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
