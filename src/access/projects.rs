//! Project lifecycle and member administration.

use chrono::{DateTime, Utc};

use super::guard::{require_member, require_owner};
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{Membership, Project, ProjectMembership};
use crate::validation::validate_project_name;

/// Creates a project with the requester as its first owner.
pub fn create_project(
    store: &dyn Store,
    requester_id: &str,
    name: &str,
    now: DateTime<Utc>,
) -> Result<ProjectMembership> {
    let name = name.trim();
    validate_project_name(name)?;

    let created = store.create_project_with_owner(name, requester_id, now)?;

    tracing::info!(
        project_id = created.project.id,
        owner = requester_id,
        "project created"
    );

    Ok(created)
}

/// Returns the project and the requester's membership in it.
pub fn get_project(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
) -> Result<ProjectMembership> {
    let project = store.get_project(project_id)?.ok_or(Error::NotFound)?;
    let membership = require_member(store, requester_id, project_id)?;
    Ok(ProjectMembership {
        project,
        membership,
    })
}

pub fn list_projects(store: &dyn Store, requester_id: &str) -> Result<Vec<ProjectMembership>> {
    store.list_user_projects(requester_id)
}

pub fn rename_project(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
    name: &str,
) -> Result<Project> {
    let mut project = store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_owner(store, requester_id, project_id)?;

    let name = name.trim();
    validate_project_name(name)?;

    store.rename_project(project_id, name)?;
    project.name = name.to_string();

    tracing::info!(project_id, "project renamed");
    Ok(project)
}

/// Deletes the project together with everything that belongs to it.
pub fn delete_project(store: &dyn Store, requester_id: &str, project_id: i64) -> Result<Project> {
    let project = store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_owner(store, requester_id, project_id)?;

    if !store.delete_project(project_id)? {
        return Err(Error::NotFound);
    }

    tracing::info!(project_id, requester = requester_id, "project deleted");
    Ok(project)
}

/// Members of a project in the order they joined.
pub fn list_members(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
) -> Result<Vec<Membership>> {
    store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_member(store, requester_id, project_id)?;
    store.list_members(project_id)
}

/// Grants or revokes the editor flag. Ownership itself cannot be changed here.
pub fn set_editor(
    store: &dyn Store,
    requester_id: &str,
    membership_id: i64,
    is_editor: bool,
) -> Result<Membership> {
    let target = store
        .get_membership_by_id(membership_id)?
        .ok_or(Error::NotFound)?;
    require_owner(store, requester_id, target.project_id)?;

    let updated = store.update_editor_flag(membership_id, is_editor)?;

    tracing::info!(
        project_id = updated.project_id,
        membership_id,
        is_editor,
        "editor flag updated"
    );
    Ok(updated)
}

/// Removes another member from the project.
pub fn remove_member(store: &dyn Store, requester_id: &str, membership_id: i64) -> Result<Membership> {
    let target = store
        .get_membership_by_id(membership_id)?
        .ok_or(Error::NotFound)?;

    // Checked before the role so that members of any role get the same answer.
    if target.user_id == requester_id {
        return Err(Error::SelfRemovalForbidden);
    }

    require_owner(store, requester_id, target.project_id)?;

    let removed = store.remove_membership(membership_id, requester_id)?;

    tracing::info!(
        project_id = removed.project_id,
        membership_id,
        removed_user = %removed.user_id,
        "member removed"
    );
    Ok(removed)
}
