use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::access::TaskPatch;
use crate::types::{Membership, NewTask, ProjectMembership, TaskProgress, User};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserTokenRequest {
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub id: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CreateTokenResponse {
    pub token: String,
    pub metadata: TokenResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: String,
}

/// A project as seen by one of its members.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub membership_id: i64,
    pub is_owner: bool,
    pub is_editor: bool,
    pub capabilities: Vec<&'static str>,
}

impl From<ProjectMembership> for ProjectResponse {
    fn from(pm: ProjectMembership) -> Self {
        Self {
            id: pm.project.id,
            name: pm.project.name,
            created_at: pm.project.created_at,
            membership_id: pm.membership.id,
            is_owner: pm.membership.is_owner,
            is_editor: pm.membership.is_editor,
            capabilities: pm.membership.capabilities().to_strings(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub project_id: i64,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub is_owner: bool,
    pub is_editor: bool,
    pub created_at: DateTime<Utc>,
}

impl MemberResponse {
    #[must_use]
    pub fn new(membership: Membership, user: Option<User>) -> Self {
        Self {
            id: membership.id,
            project_id: membership.project_id,
            user_id: membership.user_id,
            username: user.map(|u| u.username),
            is_owner: membership.is_owner,
            is_editor: membership.is_editor,
            created_at: membership.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMembershipRequest {
    pub is_editor: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    pub invitee_username: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub due_date: NaiveDate,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub progress: TaskProgress,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            due_date: req.due_date,
            note: req.note,
            assignee: req.assignee,
            progress: req.progress,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub progress: Option<TaskProgress>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            due_date: req.due_date,
            note: req.note,
            assignee: req.assignee,
            progress: req.progress,
        }
    }
}
