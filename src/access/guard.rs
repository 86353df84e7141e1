//! Authorization decisions for project-scoped actions.
//!
//! Every function here only reads from the store. Handlers call the same check
//! before rendering a form and before applying it, so repeated calls must agree.

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{Capability, Invitation, Membership};

/// Returns the requester's membership in the project, if any.
/// Absence means "no standing in this project", not an error.
pub fn resolve_membership(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
) -> Result<Option<Membership>> {
    store.get_membership(project_id, requester_id)
}

/// Returns the requester's membership if it grants `required`, or `Forbidden`.
pub fn require_capability(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
    required: Capability,
) -> Result<Membership> {
    match resolve_membership(store, requester_id, project_id)? {
        Some(membership) if membership.capabilities().has(required) => Ok(membership),
        _ => {
            tracing::warn!(
                requester = requester_id,
                project_id,
                required = %required,
                "access denied"
            );
            Err(Error::Forbidden)
        }
    }
}

/// Any membership, including read-only viewers.
pub fn require_member(store: &dyn Store, requester_id: &str, project_id: i64) -> Result<Membership> {
    require_capability(store, requester_id, project_id, Capability::VIEW)
}

pub fn require_owner(store: &dyn Store, requester_id: &str, project_id: i64) -> Result<Membership> {
    require_capability(store, requester_id, project_id, Capability::ADMINISTER)
}

/// Owners and editors.
pub fn require_editor(store: &dyn Store, requester_id: &str, project_id: i64) -> Result<Membership> {
    require_capability(store, requester_id, project_id, Capability::EDIT)
}

/// Cancelling an invitation is open to the project's owners and to the invitee.
pub fn require_owner_or_invitee(
    store: &dyn Store,
    requester_id: &str,
    invitation: &Invitation,
) -> Result<bool> {
    if invitation.invitee_id == requester_id {
        return Ok(true);
    }

    let is_owner = resolve_membership(store, requester_id, invitation.project_id)?
        .map(|m| m.is_owner)
        .unwrap_or(false);

    Ok(is_owner)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::access::test_support::{TestStore, add_member, add_user};

    #[test]
    fn test_roles_map_to_requirements() {
        let t = TestStore::new();
        add_user(&t.store, "alice");
        add_user(&t.store, "erin");
        add_user(&t.store, "vic");
        add_user(&t.store, "mallory");
        let project = t
            .store
            .create_project_with_owner("Alpha", "alice", Utc::now())
            .unwrap()
            .project;
        add_member(&t.store, project.id, "erin", true);
        add_member(&t.store, project.id, "vic", false);

        let store: &dyn Store = &t.store;

        assert!(require_owner(store, "alice", project.id).is_ok());
        assert!(require_editor(store, "alice", project.id).is_ok());

        assert!(matches!(require_owner(store, "erin", project.id), Err(Error::Forbidden)));
        assert!(require_editor(store, "erin", project.id).is_ok());

        assert!(matches!(require_editor(store, "vic", project.id), Err(Error::Forbidden)));
        assert!(require_member(store, "vic", project.id).is_ok());

        assert!(matches!(require_member(store, "mallory", project.id), Err(Error::Forbidden)));
        assert!(resolve_membership(store, "mallory", project.id).unwrap().is_none());
    }

    #[test]
    fn test_owner_or_invitee() {
        let t = TestStore::new();
        for user in ["alice", "bob", "vic"] {
            add_user(&t.store, user);
        }
        let project = t
            .store
            .create_project_with_owner("Alpha", "alice", Utc::now())
            .unwrap()
            .project;
        add_member(&t.store, project.id, "vic", false);
        let invitation = t
            .store
            .create_invitation(project.id, "alice", "bob", Utc::now())
            .unwrap();

        let store: &dyn Store = &t.store;
        assert!(require_owner_or_invitee(store, "alice", &invitation).unwrap());
        assert!(require_owner_or_invitee(store, "bob", &invitation).unwrap());
        assert!(!require_owner_or_invitee(store, "vic", &invitation).unwrap());
    }

    #[test]
    fn test_guard_is_side_effect_free() {
        let t = TestStore::new();
        add_user(&t.store, "alice");
        let project = t
            .store
            .create_project_with_owner("Alpha", "alice", Utc::now())
            .unwrap()
            .project;

        let store: &dyn Store = &t.store;
        let first = require_owner(store, "alice", project.id).unwrap();
        let second = require_owner(store, "alice", project.id).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.list_members(project.id).unwrap(), vec![first]);
    }
}
