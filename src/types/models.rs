use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Capability;

/// How long an invitation stays usable after it is created.
pub const INVITATION_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(skip)]
    pub token_hash: String,
    #[serde(skip)]
    pub token_lookup: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    pub project_id: i64,
    pub user_id: String,
    pub is_owner: bool,
    pub is_editor: bool,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    #[must_use]
    pub fn capabilities(&self) -> Capability {
        Capability::from_flags(self.is_owner, self.is_editor)
    }
}

/// A project together with the requesting user's membership in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMembership {
    pub project: Project,
    pub membership: Membership,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub project_id: i64,
    pub inviter_id: String,
    pub invitee_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Expiry of an invitation issued at `issued_at`.
    #[must_use]
    pub fn expiry_for(issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + Duration::days(INVITATION_VALIDITY_DAYS)
    }

    /// An invitation is still usable at the exact expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskProgress {
    #[default]
    NotStarted,
    Started,
    Done,
}

impl TaskProgress {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
            Self::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<TaskProgress> {
        match s {
            "not_started" => Some(Self::NotStarted),
            "started" => Some(Self::Started),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub due_date: NaiveDate,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub progress: TaskProgress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub due_date: NaiveDate,
    pub note: String,
    pub assignee: Option<String>,
    pub progress: TaskProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitation(expires_at: DateTime<Utc>) -> Invitation {
        Invitation {
            id: 1,
            project_id: 1,
            inviter_id: "alice".to_string(),
            invitee_id: "bob".to_string(),
            expires_at,
            created_at: expires_at - Duration::days(INVITATION_VALIDITY_DAYS),
        }
    }

    #[test]
    fn test_invitation_valid_at_expiry_instant() {
        let expiry = Utc::now();
        let inv = invitation(expiry);
        assert!(!inv.is_expired(expiry));
        assert!(inv.is_expired(expiry + Duration::milliseconds(1)));
        assert!(!inv.is_expired(expiry - Duration::days(1)));
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let now = Utc::now();
        assert_eq!(Invitation::expiry_for(now) - now, Duration::days(7));
    }

    #[test]
    fn test_membership_capabilities() {
        let viewer = Membership {
            id: 1,
            project_id: 1,
            user_id: "bob".to_string(),
            is_owner: false,
            is_editor: false,
            created_at: Utc::now(),
        };
        assert!(!viewer.capabilities().has(Capability::EDIT));

        let owner = Membership {
            is_owner: true,
            ..viewer
        };
        assert!(owner.capabilities().has(Capability::ADMINISTER));
        assert!(owner.capabilities().has(Capability::EDIT));
    }

    #[test]
    fn test_task_progress_round_trip_names() {
        assert_eq!(TaskProgress::parse("started"), Some(TaskProgress::Started));
        assert_eq!(TaskProgress::Done.as_str(), "done");
        assert_eq!(TaskProgress::parse("DONE!!!"), None);
    }
}
