//! Dated work items inside a project. Members read, editors write.

use chrono::{DateTime, NaiveDate, Utc};

use super::guard::{require_editor, require_member};
use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{NewTask, Task, TaskProgress};
use crate::validation::validate_assignee;

/// Partial update of a task. `None` leaves the field untouched; an empty
/// assignee clears it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub due_date: Option<NaiveDate>,
    pub note: Option<String>,
    pub assignee: Option<String>,
    pub progress: Option<TaskProgress>,
}

fn normalize_assignee(assignee: Option<String>) -> Result<Option<String>> {
    match assignee.map(|a| a.trim().to_string()) {
        Some(a) if a.is_empty() => Ok(None),
        Some(a) => {
            validate_assignee(&a)?;
            Ok(Some(a))
        }
        None => Ok(None),
    }
}

fn load_task(store: &dyn Store, task_id: i64) -> Result<Task> {
    store.get_task(task_id)?.ok_or(Error::NotFound)
}

pub fn list_tasks(store: &dyn Store, requester_id: &str, project_id: i64) -> Result<Vec<Task>> {
    store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_member(store, requester_id, project_id)?;
    store.list_tasks(project_id)
}

pub fn get_task(store: &dyn Store, requester_id: &str, task_id: i64) -> Result<Task> {
    let task = load_task(store, task_id)?;
    require_member(store, requester_id, task.project_id)?;
    Ok(task)
}

pub fn create_task(
    store: &dyn Store,
    requester_id: &str,
    project_id: i64,
    draft: NewTask,
    now: DateTime<Utc>,
) -> Result<Task> {
    store.get_project(project_id)?.ok_or(Error::NotFound)?;
    require_editor(store, requester_id, project_id)?;

    let draft = NewTask {
        assignee: normalize_assignee(draft.assignee)?,
        ..draft
    };
    let task = store.create_task(project_id, &draft, now)?;

    tracing::info!(project_id, task_id = task.id, "task created");
    Ok(task)
}

pub fn update_task(
    store: &dyn Store,
    requester_id: &str,
    task_id: i64,
    patch: TaskPatch,
    now: DateTime<Utc>,
) -> Result<Task> {
    let mut task = load_task(store, task_id)?;
    require_editor(store, requester_id, task.project_id)?;

    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(note) = patch.note {
        task.note = note;
    }
    if patch.assignee.is_some() {
        task.assignee = normalize_assignee(patch.assignee)?;
    }
    if let Some(progress) = patch.progress {
        task.progress = progress;
    }
    task.updated_at = now;

    store.update_task(&task)?;

    tracing::info!(project_id = task.project_id, task_id, "task updated");
    Ok(task)
}

pub fn delete_task(store: &dyn Store, requester_id: &str, task_id: i64) -> Result<Task> {
    let task = load_task(store, task_id)?;
    require_editor(store, requester_id, task.project_id)?;

    if !store.delete_task(task_id)? {
        return Err(Error::NotFound);
    }

    tracing::info!(project_id = task.project_id, task_id, "task deleted");
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::test_support::{TestStore, add_member, add_user};

    fn setup() -> (TestStore, i64) {
        let t = TestStore::new();
        for user in ["alice", "erin", "vic", "mallory"] {
            add_user(&t.store, user);
        }
        let project_id = t
            .store
            .create_project_with_owner("Alpha", "alice", Utc::now())
            .unwrap()
            .project
            .id;
        add_member(&t.store, project_id, "erin", true);
        add_member(&t.store, project_id, "vic", false);
        (t, project_id)
    }

    fn draft(note: &str) -> NewTask {
        NewTask {
            due_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            note: note.to_string(),
            assignee: Some("vic".to_string()),
            progress: TaskProgress::NotStarted,
        }
    }

    #[test]
    fn test_owner_and_editor_can_write() {
        let (t, project_id) = setup();
        let now = Utc::now();

        let by_owner = create_task(&t.store, "alice", project_id, draft("blocking"), now).unwrap();
        let by_editor = create_task(&t.store, "erin", project_id, draft("lights"), now).unwrap();

        let patch = TaskPatch {
            progress: Some(TaskProgress::Started),
            ..Default::default()
        };
        let updated = update_task(&t.store, "erin", by_owner.id, patch, now).unwrap();
        assert_eq!(updated.progress, TaskProgress::Started);
        assert_eq!(updated.note, "blocking");

        delete_task(&t.store, "alice", by_editor.id).unwrap();
        let remaining = list_tasks(&t.store, "vic", project_id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].progress, TaskProgress::Started);
    }

    #[test]
    fn test_viewer_reads_but_cannot_write() {
        let (t, project_id) = setup();
        let now = Utc::now();
        let task = create_task(&t.store, "alice", project_id, draft("blocking"), now).unwrap();

        assert_eq!(get_task(&t.store, "vic", task.id).unwrap(), task);
        assert!(matches!(
            create_task(&t.store, "vic", project_id, draft("props"), now),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            update_task(&t.store, "vic", task.id, TaskPatch::default(), now),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            delete_task(&t.store, "vic", task.id),
            Err(Error::Forbidden)
        ));
        assert_eq!(t.store.list_tasks(project_id).unwrap(), vec![task]);
    }

    #[test]
    fn test_outsider_cannot_read() {
        let (t, project_id) = setup();
        let task = create_task(&t.store, "alice", project_id, draft("blocking"), Utc::now()).unwrap();

        assert!(matches!(
            list_tasks(&t.store, "mallory", project_id),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            get_task(&t.store, "mallory", task.id),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            get_task(&t.store, "alice", task.id + 1),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn test_assignee_rules() {
        let (t, project_id) = setup();
        let now = Utc::now();

        let mut long = draft("costumes");
        long.assignee = Some("x".repeat(16));
        assert!(matches!(
            create_task(&t.store, "alice", project_id, long, now),
            Err(Error::BadRequest(_))
        ));

        let task = create_task(&t.store, "alice", project_id, draft("costumes"), now).unwrap();
        let cleared = TaskPatch {
            assignee: Some("  ".to_string()),
            ..Default::default()
        };
        let task = update_task(&t.store, "alice", task.id, cleared, now).unwrap();
        assert_eq!(task.assignee, None);
    }
}
