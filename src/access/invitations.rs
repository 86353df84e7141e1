//! Invitation lifecycle: issue, accept, cancel or decline.
//!
//! An invitation is created by a project owner for a known user and stays
//! usable for seven days. Accepting it consumes the invitation and produces a
//! viewer membership; cancelling (by an owner) or declining (by the invitee)
//! deletes it. Expiry is computed from `now` on every read and never stored.

use chrono::{DateTime, Utc};

use super::guard::{require_member, require_owner, require_owner_or_invitee};
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{Invitation, Membership};

/// Invites the user named `invitee_username` into the project.
pub fn invite(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
    invitee_username: &str,
    now: DateTime<Utc>,
) -> Result<Invitation> {
    store.get_project(project_id)?.ok_or(Error::NotFound)?;

    let inviter = require_owner(store, requester_id, project_id)?;

    let invitee = store
        .get_user_by_username(invitee_username)?
        .ok_or_else(|| Error::UnknownInvitee(invitee_username.to_string()))?;

    let invitation = store.create_invitation(project_id, &inviter.user_id, &invitee.id, now)?;

    tracing::info!(
        project_id,
        invitation_id = invitation.id,
        invitee = %invitee.username,
        expires_at = %invitation.expires_at,
        "invitation created"
    );

    Ok(invitation)
}

/// Accepts an invitation on behalf of its invitee.
pub fn accept(
    store: &dyn Store,
    requester_id: &str,
    invitation_id: i64,
    now: DateTime<Utc>,
) -> Result<Membership> {
    let invitation = store.get_invitation(invitation_id)?.ok_or(Error::NotFound)?;

    if invitation.is_expired(now) {
        return Err(Error::Expired);
    }
    if invitation.invitee_id != requester_id {
        tracing::warn!(
            requester = requester_id,
            invitation_id,
            "invitation accepted by someone other than the invitee"
        );
        return Err(Error::Forbidden);
    }

    // The store re-checks all of the above inside the accepting transaction.
    let membership = store.accept_invitation(invitation_id, requester_id, now)?;

    tracing::info!(
        project_id = membership.project_id,
        invitation_id,
        membership_id = membership.id,
        "invitation accepted"
    );

    Ok(membership)
}

/// Cancels (owner) or declines (invitee) an invitation.
pub fn cancel(store: &dyn Store, requester_id: &str, invitation_id: i64) -> Result<Invitation> {
    let invitation = store.get_invitation(invitation_id)?.ok_or(Error::NotFound)?;

    if !require_owner_or_invitee(store, requester_id, &invitation)? {
        tracing::warn!(requester = requester_id, invitation_id, "cancel denied");
        return Err(Error::Forbidden);
    }

    // Lost a race with an accept or another cancel.
    if !store.delete_invitation(invitation_id)? {
        return Err(Error::NotFound);
    }

    tracing::info!(
        project_id = invitation.project_id,
        invitation_id,
        declined = invitation.invitee_id == requester_id,
        "invitation cancelled"
    );

    Ok(invitation)
}

/// Active invitations of a project, visible to any member.
pub fn list_for_project(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
    now: DateTime<Utc>,
) -> Result<Vec<Invitation>> {
    store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_member(store, requester_id, project_id)?;
    store.list_active_invitations(project_id, now)
}

/// Invitations waiting on the requester.
pub fn list_for_invitee(
    store: &dyn Store,
    requester_id: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Invitation>> {
    store.list_pending_invitations(requester_id, now)
}
