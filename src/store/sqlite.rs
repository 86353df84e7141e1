use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        tracing::error!("Invalid date in database: '{}' - {}", s, e);
        Utc::now().date_naive()
    })
}

fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// True for UNIQUE / PRIMARY KEY conflicts; foreign key failures are not duplicates.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(&row.get::<_, String>(2)?),
        updated_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

fn token_from_row(row: &Row<'_>) -> rusqlite::Result<Token> {
    Ok(Token {
        id: row.get(0)?,
        token_hash: row.get(1)?,
        token_lookup: row.get(2)?,
        is_admin: row.get(3)?,
        user_id: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
        expires_at: row.get::<_, Option<String>>(6)?.map(|s| parse_datetime(&s)),
        last_used_at: row.get::<_, Option<String>>(7)?.map(|s| parse_datetime(&s)),
    })
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<_, String>(2)?),
    })
}

fn membership_from_row(row: &Row<'_>) -> rusqlite::Result<Membership> {
    Ok(Membership {
        id: row.get(0)?,
        project_id: row.get(1)?,
        user_id: row.get(2)?,
        is_owner: row.get(3)?,
        is_editor: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn invitation_from_row(row: &Row<'_>) -> rusqlite::Result<Invitation> {
    Ok(Invitation {
        id: row.get(0)?,
        project_id: row.get(1)?,
        inviter_id: row.get(2)?,
        invitee_id: row.get(3)?,
        expires_at: parse_datetime(&row.get::<_, String>(4)?),
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let progress: String = row.get(5)?;
    Ok(Task {
        id: row.get(0)?,
        project_id: row.get(1)?,
        due_date: parse_date(&row.get::<_, String>(2)?),
        note: row.get(3)?,
        assignee: row.get(4)?,
        progress: TaskProgress::parse(&progress).unwrap_or_else(|| {
            tracing::error!("Invalid task progress in database: '{}'", progress);
            TaskProgress::default()
        }),
        created_at: parse_datetime(&row.get::<_, String>(6)?),
        updated_at: parse_datetime(&row.get::<_, String>(7)?),
    })
}

fn fetch_membership(conn: &Connection, id: i64) -> Result<Option<Membership>> {
    conn.query_row(
        "SELECT id, project_id, user_id, is_owner, is_editor, created_at
         FROM memberships WHERE id = ?1",
        params![id],
        membership_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn fetch_membership_for(
    conn: &Connection,
    project_id: i64,
    user_id: &str,
) -> Result<Option<Membership>> {
    conn.query_row(
        "SELECT id, project_id, user_id, is_owner, is_editor, created_at
         FROM memberships WHERE project_id = ?1 AND user_id = ?2",
        params![project_id, user_id],
        membership_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn fetch_invitation(conn: &Connection, id: i64) -> Result<Option<Invitation>> {
    conn.query_row(
        "SELECT id, project_id, inviter_id, invitee_id, expires_at, created_at
         FROM invitations WHERE id = ?1",
        params![id],
        invitation_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn fetch_invitation_for(
    conn: &Connection,
    project_id: i64,
    invitee_id: &str,
) -> Result<Option<Invitation>> {
    conn.query_row(
        "SELECT id, project_id, inviter_id, invitee_id, expires_at, created_at
         FROM invitations WHERE project_id = ?1 AND invitee_id = ?2",
        params![project_id, invitee_id],
        invitation_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn insert_membership(
    conn: &Connection,
    project_id: i64,
    user_id: &str,
    is_owner: bool,
    now: DateTime<Utc>,
) -> Result<Membership> {
    conn.execute(
        "INSERT INTO memberships (project_id, user_id, is_owner, is_editor, created_at)
         VALUES (?1, ?2, ?3, 0, ?4)",
        params![project_id, user_id, is_owner, format_datetime(&now)],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            Error::AlreadyMember
        } else {
            Error::from(e)
        }
    })?;

    Ok(Membership {
        id: conn.last_insert_rowid(),
        project_id,
        user_id: user_id.to_string(),
        is_owner,
        is_editor: false,
        created_at: now,
    })
}

/// Keeps only invitations usable at `now`, earliest expiry first.
fn active_sorted(invitations: Vec<Invitation>, now: DateTime<Utc>) -> Vec<Invitation> {
    let mut active: Vec<Invitation> = invitations
        .into_iter()
        .filter(|inv| !inv.is_expired(now))
        .collect();
    active.sort_by_key(|inv| (inv.expires_at, inv.id));
    active
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // User operations

    fn create_user(&self, user: &User) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO users (id, username, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                user.id,
                user.username,
                format_datetime(&user.created_at),
                format_datetime(&user.updated_at),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::AlreadyExists),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_user(&self, id: &str) -> Result<Option<User>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, username, created_at, updated_at FROM users WHERE id = ?1",
            params![id],
            user_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, username, created_at, updated_at FROM users WHERE username = ?1",
            params![username],
            user_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_users(&self, cursor: &str, limit: i32) -> Result<Vec<User>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, username, created_at, updated_at
             FROM users WHERE id > ?1 ORDER BY id LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![cursor, limit], user_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_user(&self, id: &str) -> Result<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let orphaned: i32 = tx.query_row(
            "SELECT COUNT(*) FROM memberships m
             WHERE m.user_id = ?1 AND m.is_owner = 1
               AND NOT EXISTS (
                   SELECT 1 FROM memberships o
                   WHERE o.project_id = m.project_id AND o.is_owner = 1 AND o.user_id != ?1
               )",
            params![id],
            |row| row.get(0),
        )?;

        if orphaned > 0 {
            return Err(Error::ConsistencyViolation(format!(
                "user is the last owner of {orphaned} project(s)"
            )));
        }

        let rows = tx.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    // Token operations

    fn create_token(&self, token: &Token) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO tokens (id, token_hash, token_lookup, is_admin, user_id, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                token.id,
                token.token_hash,
                token.token_lookup,
                token.is_admin,
                token.user_id,
                format_datetime(&token.created_at),
                token.expires_at.as_ref().map(format_datetime),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::TokenLookupCollision),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_token_by_id(&self, id: &str) -> Result<Option<Token>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, token_hash, token_lookup, is_admin, user_id, created_at, expires_at, last_used_at
             FROM tokens WHERE id = ?1",
            params![id],
            token_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_token_by_lookup(&self, lookup: &str) -> Result<Option<Token>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, token_hash, token_lookup, is_admin, user_id, created_at, expires_at, last_used_at
             FROM tokens WHERE token_lookup = ?1",
            params![lookup],
            token_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_tokens(&self, cursor: &str, limit: i32) -> Result<Vec<Token>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, token_hash, token_lookup, is_admin, user_id, created_at, expires_at, last_used_at
             FROM tokens WHERE id > ?1 ORDER BY id LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![cursor, limit], token_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_user_tokens(&self, user_id: &str) -> Result<Vec<Token>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, token_hash, token_lookup, is_admin, user_id, created_at, expires_at, last_used_at
             FROM tokens WHERE user_id = ?1 ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![user_id], token_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_token(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM tokens WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn update_token_last_used(&self, id: &str) -> Result<()> {
        self.conn().execute(
            "UPDATE tokens SET last_used_at = ?1 WHERE id = ?2",
            params![format_datetime(&Utc::now()), id],
        )?;
        Ok(())
    }

    fn has_admin_token(&self) -> Result<bool> {
        let conn = self.conn();
        let count: i32 = conn.query_row(
            "SELECT COUNT(*) FROM tokens WHERE is_admin = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // Project operations

    fn create_project_with_owner(
        &self,
        name: &str,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ProjectMembership> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO projects (name, created_at) VALUES (?1, ?2)",
            params![name, format_datetime(&now)],
        )?;
        let project = Project {
            id: tx.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        };

        let membership = insert_membership(&tx, project.id, owner_id, true, now)?;

        tx.commit()?;
        Ok(ProjectMembership {
            project,
            membership,
        })
    }

    fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name, created_at FROM projects WHERE id = ?1",
            params![id],
            project_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn rename_project(&self, id: i64, name: &str) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE projects SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn delete_project(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Membership operations

    fn get_membership(&self, project_id: i64, user_id: &str) -> Result<Option<Membership>> {
        fetch_membership_for(&self.conn(), project_id, user_id)
    }

    fn get_membership_by_id(&self, id: i64) -> Result<Option<Membership>> {
        fetch_membership(&self.conn(), id)
    }

    fn list_members(&self, project_id: i64) -> Result<Vec<Membership>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, project_id, user_id, is_owner, is_editor, created_at
             FROM memberships WHERE project_id = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![project_id], membership_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_user_projects(&self, user_id: &str) -> Result<Vec<ProjectMembership>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT p.id, p.name, p.created_at,
                    m.id, m.project_id, m.user_id, m.is_owner, m.is_editor, m.created_at
             FROM memberships m
             JOIN projects p ON p.id = m.project_id
             WHERE m.user_id = ?1
             ORDER BY p.id",
        )?;

        let rows = stmt.query_map(params![user_id], |row| {
            Ok(ProjectMembership {
                project: Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(&row.get::<_, String>(2)?),
                },
                membership: Membership {
                    id: row.get(3)?,
                    project_id: row.get(4)?,
                    user_id: row.get(5)?,
                    is_owner: row.get(6)?,
                    is_editor: row.get(7)?,
                    created_at: parse_datetime(&row.get::<_, String>(8)?),
                },
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_editor_flag(&self, id: i64, is_editor: bool) -> Result<Membership> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE memberships SET is_editor = ?1 WHERE id = ?2",
            params![is_editor, id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        fetch_membership(&conn, id)?.ok_or(Error::NotFound)
    }

    fn remove_membership(&self, id: i64, acting_user_id: &str) -> Result<Membership> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let membership = fetch_membership(&tx, id)?.ok_or(Error::NotFound)?;

        if membership.user_id == acting_user_id {
            return Err(Error::SelfRemovalForbidden);
        }

        if membership.is_owner {
            let other_owners: i32 = tx.query_row(
                "SELECT COUNT(*) FROM memberships
                 WHERE project_id = ?1 AND is_owner = 1 AND id != ?2",
                params![membership.project_id, id],
                |row| row.get(0),
            )?;
            if other_owners == 0 {
                return Err(Error::ConsistencyViolation(
                    "project would be left without an owner".to_string(),
                ));
            }
        }

        tx.execute("DELETE FROM memberships WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(membership)
    }

    // Invitation operations

    fn create_invitation(
        &self,
        project_id: i64,
        inviter_id: &str,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Invitation> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if fetch_membership_for(&tx, project_id, invitee_id)?.is_some() {
            return Err(Error::AlreadyMember);
        }

        if let Some(existing) = fetch_invitation_for(&tx, project_id, invitee_id)? {
            if !existing.is_expired(now) {
                return Err(Error::AlreadyInvited);
            }
            // A stale row would block the unique (project, invitee) pair.
            tx.execute(
                "DELETE FROM invitations WHERE id = ?1",
                params![existing.id],
            )?;
        }

        let expires_at = Invitation::expiry_for(now);
        tx.execute(
            "INSERT INTO invitations (project_id, inviter_id, invitee_id, expires_at, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                project_id,
                inviter_id,
                invitee_id,
                format_datetime(&expires_at),
                format_datetime(&now),
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::AlreadyInvited
            } else {
                Error::from(e)
            }
        })?;

        let invitation = Invitation {
            id: tx.last_insert_rowid(),
            project_id,
            inviter_id: inviter_id.to_string(),
            invitee_id: invitee_id.to_string(),
            expires_at,
            created_at: now,
        };

        tx.commit()?;
        Ok(invitation)
    }

    fn get_invitation(&self, id: i64) -> Result<Option<Invitation>> {
        fetch_invitation(&self.conn(), id)
    }

    fn find_active_invitation(
        &self,
        project_id: i64,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Invitation>> {
        Ok(fetch_invitation_for(&self.conn(), project_id, invitee_id)?
            .filter(|inv| !inv.is_expired(now)))
    }

    fn list_active_invitations(
        &self,
        project_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Invitation>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, project_id, inviter_id, invitee_id, expires_at, created_at
             FROM invitations WHERE project_id = ?1",
        )?;

        let rows = stmt.query_map(params![project_id], invitation_from_row)?;
        let invitations = rows.collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(active_sorted(invitations, now))
    }

    fn list_pending_invitations(
        &self,
        invitee_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Invitation>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, project_id, inviter_id, invitee_id, expires_at, created_at
             FROM invitations WHERE invitee_id = ?1",
        )?;

        let rows = stmt.query_map(params![invitee_id], invitation_from_row)?;
        let invitations = rows.collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(active_sorted(invitations, now))
    }

    fn delete_invitation(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM invitations WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn accept_invitation(&self, id: i64, user_id: &str, now: DateTime<Utc>) -> Result<Membership> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let invitation = fetch_invitation(&tx, id)?.ok_or(Error::NotFound)?;

        if invitation.is_expired(now) {
            return Err(Error::Expired);
        }
        if invitation.invitee_id != user_id {
            return Err(Error::Forbidden);
        }
        if fetch_membership_for(&tx, invitation.project_id, user_id)?.is_some() {
            return Err(Error::AlreadyMember);
        }

        let consumed = tx.execute("DELETE FROM invitations WHERE id = ?1", params![id])?;
        if consumed != 1 {
            return Err(Error::ConsistencyViolation(
                "invitation was already consumed".to_string(),
            ));
        }

        let membership = insert_membership(&tx, invitation.project_id, user_id, false, now)?;

        tx.commit()?;
        Ok(membership)
    }

    // Task operations

    fn create_task(&self, project_id: i64, task: &NewTask, now: DateTime<Utc>) -> Result<Task> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO tasks (project_id, due_date, note, assignee, progress, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                project_id,
                format_date(&task.due_date),
                task.note,
                task.assignee,
                task.progress.as_str(),
                format_datetime(&now),
            ],
        )?;

        Ok(Task {
            id: conn.last_insert_rowid(),
            project_id,
            due_date: task.due_date,
            note: task.note.clone(),
            assignee: task.assignee.clone(),
            progress: task.progress,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_task(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, project_id, due_date, note, assignee, progress, created_at, updated_at
             FROM tasks WHERE id = ?1",
            params![id],
            task_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, project_id, due_date, note, assignee, progress, created_at, updated_at
             FROM tasks WHERE project_id = ?1 ORDER BY due_date, id",
        )?;

        let rows = stmt.query_map(params![project_id], task_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_task(&self, task: &Task) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE tasks SET due_date = ?1, note = ?2, assignee = ?3, progress = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                format_date(&task.due_date),
                task.note,
                task.assignee,
                task.progress.as_str(),
                format_datetime(&task.updated_at),
                task.id,
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn delete_task(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }
}
