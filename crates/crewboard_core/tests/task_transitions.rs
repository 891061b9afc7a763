use crewboard_core::{ActivityKind, CrewStore, StoreError, TaskStatus};
use uuid::Uuid;

fn seeded_store() -> (CrewStore, Uuid, Uuid) {
    let mut store = CrewStore::new();
    store.load_projects();
    let riverside = store.projects()[0];
    let framing = &riverside.tasks[1];
    assert_eq!(framing.status, TaskStatus::Pending);
    let ids = (riverside.id, framing.id);
    (store, ids.0, ids.1)
}

#[test]
fn complete_task_marks_done_and_logs_activity() {
    let (mut store, project_id, task_id) = seeded_store();
    let marcus = store.current_user().id;

    let activity_id = store.complete_task(project_id, task_id).unwrap();

    let project = store.project(project_id).unwrap();
    assert!(project.task(task_id).unwrap().is_done());
    assert_eq!(
        project.last_activity_preview,
        "Marcus completed Frame second floor walls"
    );

    let head = &store.activities()[0];
    assert_eq!(head.id(), activity_id);
    assert_eq!(head.kind(), ActivityKind::TaskCompleted);
    assert_eq!(head.actor_id(), marcus);
    assert_eq!(head.task_id(), Some(task_id));
    assert!(store.activities_for_current_user().is_empty());
}

#[test]
fn completing_twice_fails_and_reopen_restores_pending() {
    let (mut store, project_id, task_id) = seeded_store();
    store.complete_task(project_id, task_id).unwrap();

    let err = store.complete_task(project_id, task_id).unwrap_err();
    assert!(matches!(err, StoreError::PreconditionFailed(_)));
    assert_eq!(store.activities().len(), 1);

    store.reopen_task(project_id, task_id).unwrap();

    let task = store.project(project_id).unwrap().task(task_id).unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(store.activities()[0].kind(), ActivityKind::TaskReopened);
    assert_eq!(store.activities().len(), 2);
}

#[test]
fn reopen_pending_task_fails() {
    let (mut store, project_id, task_id) = seeded_store();

    let err = store.reopen_task(project_id, task_id).unwrap_err();

    assert!(matches!(err, StoreError::PreconditionFailed(_)));
    assert!(store.activities().is_empty());
}

#[test]
fn teammate_sees_completion_from_another_user() {
    let (mut store, project_id, task_id) = seeded_store();
    let david = store.users()[2].id;
    store.switch_user(david).unwrap();
    store.complete_task(project_id, task_id).unwrap();

    store.switch_user(store.users()[0].id).unwrap();

    let feed = store.activities_for_current_user();
    assert_eq!(feed.len(), 1);
    assert_eq!(
        store.describe_activity(feed[0]),
        "David completed Frame second floor walls"
    );
}

#[test]
fn transitions_on_unknown_ids_report_not_found() {
    let (mut store, project_id, _) = seeded_store();
    let missing = Uuid::new_v4();

    assert_eq!(
        store.complete_task(missing, missing),
        Err(StoreError::ProjectNotFound(missing))
    );
    assert_eq!(
        store.complete_task(project_id, missing),
        Err(StoreError::TaskNotFound {
            project_id,
            task_id: missing,
        })
    );
}

#[test]
fn toggle_task_flips_status_each_call() {
    let (mut store, project_id, task_id) = seeded_store();

    store.toggle_task(project_id, task_id).unwrap();
    assert_eq!(store.activities()[0].kind(), ActivityKind::TaskCompleted);
    assert!(store.project(project_id).unwrap().task(task_id).unwrap().is_done());

    store.toggle_task(project_id, task_id).unwrap();
    assert_eq!(store.activities()[0].kind(), ActivityKind::TaskReopened);
    assert_eq!(
        store.project(project_id).unwrap().task(task_id).unwrap().status,
        TaskStatus::Pending
    );

    let missing = Uuid::new_v4();
    assert_eq!(
        store.toggle_task(project_id, missing),
        Err(StoreError::TaskNotFound {
            project_id,
            task_id: missing,
        })
    );
}
