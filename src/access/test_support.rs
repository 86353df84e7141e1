use chrono::Utc;
use tempfile::TempDir;

use crate::store::{SqliteStore, Store};
use crate::types::{Membership, User};

pub struct TestStore {
    _temp: TempDir,
    pub store: SqliteStore,
}

impl TestStore {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        Self { _temp: temp, store }
    }
}

/// Creates a user whose id and username are both `name`.
pub fn add_user(store: &SqliteStore, name: &str) {
    let now = Utc::now();
    store
        .create_user(&User {
            id: name.to_string(),
            username: name.to_string(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();
}

/// Adds `user_id` to the project through the invitation path.
pub fn add_member(store: &SqliteStore, project_id: i64, user_id: &str, is_editor: bool) -> Membership {
    let owner = store
        .list_members(project_id)
        .unwrap()
        .into_iter()
        .find(|m| m.is_owner)
        .unwrap();
    let now = Utc::now();
    let invitation = store
        .create_invitation(project_id, &owner.user_id, user_id, now)
        .unwrap();
    let membership = store.accept_invitation(invitation.id, user_id, now).unwrap();

    if is_editor {
        store.update_editor_flag(membership.id, true).unwrap()
    } else {
        membership
    }
}
