use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::access::tasks;
use crate::auth::RequireUser;
use crate::server::AppState;
use crate::server::dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::server::response::{ApiError, ApiJson, ApiResponse};

pub async fn list_tasks(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i64>,
) -> impl IntoResponse {
    let tasks = tasks::list_tasks(state.store.as_ref(), &auth.user.id, project_id)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(tasks)))
}

pub async fn create_task(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i64>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> impl IntoResponse {
    let task = tasks::create_task(
        state.store.as_ref(),
        &auth.user.id,
        project_id,
        req.into(),
        Utc::now(),
    )?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(task))))
}

pub async fn get_task(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let task = tasks::get_task(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(task)))
}

pub async fn update_task(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> impl IntoResponse {
    let task = tasks::update_task(state.store.as_ref(), &auth.user.id, id, req.into(), Utc::now())?;

    Ok::<_, ApiError>(Json(ApiResponse::success(task)))
}

pub async fn delete_task(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    tasks::delete_task(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
