mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Operations that touch more than one row (project creation, invitation
/// creation and acceptance, member removal, user deletion) run as a single
/// transaction and either fully apply or leave the store unchanged.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // User operations
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn list_users(&self, cursor: &str, limit: i32) -> Result<Vec<User>>;
    /// Fails with `ConsistencyViolation` if the user is the last owner of any project.
    fn delete_user(&self, id: &str) -> Result<bool>;

    // Token operations
    fn create_token(&self, token: &Token) -> Result<()>;
    fn get_token_by_id(&self, id: &str) -> Result<Option<Token>>;
    fn get_token_by_lookup(&self, lookup: &str) -> Result<Option<Token>>;
    fn list_tokens(&self, cursor: &str, limit: i32) -> Result<Vec<Token>>;
    fn list_user_tokens(&self, user_id: &str) -> Result<Vec<Token>>;
    fn delete_token(&self, id: &str) -> Result<bool>;
    fn update_token_last_used(&self, id: &str) -> Result<()>;
    fn has_admin_token(&self) -> Result<bool>;

    // Project operations
    /// Creates the project and its first owner membership in one transaction.
    fn create_project_with_owner(
        &self,
        name: &str,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ProjectMembership>;
    fn get_project(&self, id: i64) -> Result<Option<Project>>;
    fn rename_project(&self, id: i64, name: &str) -> Result<()>;
    /// Deletes the project along with its memberships, invitations and tasks.
    fn delete_project(&self, id: i64) -> Result<bool>;

    // Membership operations
    fn get_membership(&self, project_id: i64, user_id: &str) -> Result<Option<Membership>>;
    fn get_membership_by_id(&self, id: i64) -> Result<Option<Membership>>;
    /// Memberships of a project in creation order.
    fn list_members(&self, project_id: i64) -> Result<Vec<Membership>>;
    fn list_user_projects(&self, user_id: &str) -> Result<Vec<ProjectMembership>>;
    fn update_editor_flag(&self, id: i64, is_editor: bool) -> Result<Membership>;
    /// Removes a membership on behalf of `acting_user_id`.
    /// Fails with `SelfRemovalForbidden` when the target belongs to the acting
    /// user and with `ConsistencyViolation` when it is the project's last owner.
    fn remove_membership(&self, id: i64, acting_user_id: &str) -> Result<Membership>;

    // Invitation operations
    /// Fails with `AlreadyMember` or `AlreadyInvited`; expiry is `now` + 7 days.
    fn create_invitation(
        &self,
        project_id: i64,
        inviter_id: &str,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Invitation>;
    /// Returns the invitation even if it has expired.
    fn get_invitation(&self, id: i64) -> Result<Option<Invitation>>;
    fn find_active_invitation(
        &self,
        project_id: i64,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Invitation>>;
    /// Active invitations of a project, earliest expiry first.
    fn list_active_invitations(&self, project_id: i64, now: DateTime<Utc>)
    -> Result<Vec<Invitation>>;
    /// Active invitations addressed to a user, earliest expiry first.
    fn list_pending_invitations(
        &self,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Invitation>>;
    fn delete_invitation(&self, id: i64) -> Result<bool>;
    /// Consumes the invitation and creates a viewer membership in one transaction.
    fn accept_invitation(&self, id: i64, user_id: &str, now: DateTime<Utc>) -> Result<Membership>;

    // Task operations
    fn create_task(&self, project_id: i64, task: &NewTask, now: DateTime<Utc>) -> Result<Task>;
    fn get_task(&self, id: i64) -> Result<Option<Task>>;
    fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>>;
    fn update_task(&self, task: &Task) -> Result<()>;
    fn delete_task(&self, id: i64) -> Result<bool>;
}
