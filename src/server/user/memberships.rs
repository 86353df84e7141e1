use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::access::projects;
use crate::auth::RequireUser;
use crate::server::AppState;
use crate::server::dto::{MemberResponse, UpdateMembershipRequest};
use crate::server::response::{ApiError, ApiJson, ApiResponse, StoreResultExt};

pub async fn list_members(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i64>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let members = projects::list_members(store, &auth.user.id, project_id)?;

    let mut responses = Vec::with_capacity(members.len());
    for membership in members {
        let user = store
            .get_user(&membership.user_id)
            .api_err("Failed to get user")?;
        responses.push(MemberResponse::new(membership, user));
    }

    Ok::<_, ApiError>(Json(ApiResponse::success(responses)))
}

pub async fn update_membership(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateMembershipRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let membership = projects::set_editor(store, &auth.user.id, id, req.is_editor)?;
    let user = store
        .get_user(&membership.user_id)
        .api_err("Failed to get user")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(MemberResponse::new(
        membership, user,
    ))))
}

pub async fn remove_membership(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    projects::remove_member(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
