mod invitations;
mod memberships;
mod projects;
mod tasks;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::server::AppState;

pub fn user_router() -> Router<Arc<AppState>> {
    Router::new()
        // Projects
        .route("/projects", get(projects::list_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/{id}", get(projects::get_project))
        .route("/projects/{id}", patch(projects::rename_project))
        .route("/projects/{id}", delete(projects::delete_project))
        // Members
        .route("/projects/{id}/members", get(memberships::list_members))
        .route("/memberships/{id}", patch(memberships::update_membership))
        .route("/memberships/{id}", delete(memberships::remove_membership))
        // Invitations
        .route(
            "/projects/{id}/invitations",
            get(invitations::list_project_invitations),
        )
        .route(
            "/projects/{id}/invitations",
            post(invitations::create_invitation),
        )
        .route("/invitations", get(invitations::list_my_invitations))
        .route(
            "/invitations/{id}/accept",
            post(invitations::accept_invitation),
        )
        .route("/invitations/{id}", delete(invitations::cancel_invitation))
        // Tasks
        .route("/projects/{id}/tasks", get(tasks::list_tasks))
        .route("/projects/{id}/tasks", post(tasks::create_task))
        .route("/tasks/{id}", get(tasks::get_task))
        .route("/tasks/{id}", patch(tasks::update_task))
        .route("/tasks/{id}", delete(tasks::delete_task))
}
