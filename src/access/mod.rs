//! Project-scoped operations and the authorization checks that guard them.
//!
//! Every operation takes the requesting user's id explicitly. Operations whose
//! outcome depends on the clock also take `now`, so expiry is deterministic.

pub mod guard;
pub mod invitations;
pub mod projects;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

pub use guard::{
    require_capability, require_editor, require_member, require_owner, require_owner_or_invitee,
    resolve_membership,
};
pub use tasks::TaskPatch;
