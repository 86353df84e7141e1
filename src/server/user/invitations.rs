use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::access::invitations;
use crate::auth::RequireUser;
use crate::server::AppState;
use crate::server::dto::{CreateInvitationRequest, MemberResponse};
use crate::server::response::{ApiError, ApiJson, ApiResponse};

pub async fn list_project_invitations(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i64>,
) -> impl IntoResponse {
    let pending = invitations::list_for_project(
        state.store.as_ref(),
        &auth.user.id,
        project_id,
        Utc::now(),
    )?;

    Ok::<_, ApiError>(Json(ApiResponse::success(pending)))
}

pub async fn create_invitation(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i64>,
    ApiJson(req): ApiJson<CreateInvitationRequest>,
) -> impl IntoResponse {
    let invitation = invitations::invite(
        state.store.as_ref(),
        &auth.user.id,
        project_id,
        req.invitee_username.trim(),
        Utc::now(),
    )?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(invitation))))
}

pub async fn list_my_invitations(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let pending = invitations::list_for_invitee(state.store.as_ref(), &auth.user.id, Utc::now())?;

    Ok::<_, ApiError>(Json(ApiResponse::success(pending)))
}

pub async fn accept_invitation(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let membership = invitations::accept(state.store.as_ref(), &auth.user.id, id, Utc::now())?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiResponse::success(MemberResponse::new(
            membership,
            Some(auth.user),
        ))),
    ))
}

/// Cancels the invitation (owner) or declines it (invitee).
pub async fn cancel_invitation(
    auth: RequireUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    invitations::cancel(state.store.as_ref(), &auth.user.id, id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
