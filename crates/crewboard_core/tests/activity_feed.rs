use crewboard_core::{ActivityKind, CrewStore, NewActivity, StoreError};
use uuid::Uuid;

fn seeded_store() -> CrewStore {
    let mut store = CrewStore::new();
    store.load_projects();
    store
}

#[test]
fn mock_activities_need_two_projects() {
    let mut store = CrewStore::new();

    let err = store.load_mock_activities().unwrap_err();

    assert!(matches!(err, StoreError::PreconditionFailed(_)));
    assert!(store.activities().is_empty());
}

#[test]
fn mock_activities_seed_once_most_recent_first() {
    let mut store = seeded_store();

    assert!(store.load_mock_activities().unwrap());
    let first: Vec<Uuid> = store.activities().iter().map(|activity| activity.id()).collect();
    assert!(!store.load_mock_activities().unwrap());
    let second: Vec<Uuid> = store.activities().iter().map(|activity| activity.id()).collect();

    assert_eq!(first.len(), 7);
    assert_eq!(first, second);
    assert!(store
        .activities()
        .windows(2)
        .all(|pair| pair[0].timestamp() >= pair[1].timestamp()));
}

#[test]
fn mock_activities_reference_existing_projects_and_tasks() {
    let mut store = seeded_store();
    store.load_mock_activities().unwrap();

    for activity in store.activities() {
        let project = store.project(activity.project_id()).unwrap();
        if let Some(task_id) = activity.task_id() {
            assert!(project.task(task_id).is_some());
        }
        assert!(store.user(activity.actor_id()).is_some());
    }
}

#[test]
fn add_activity_always_inserts_at_front() {
    let mut store = seeded_store();
    store.load_mock_activities().unwrap();
    let project_id = store.projects()[1].id;
    let actors: Vec<Uuid> = store.users().iter().map(|user| user.id).collect();

    let mut added = Vec::new();
    for actor in actors.iter().take(3) {
        let id = store
            .add_activity(NewActivity::new(ActivityKind::TaskCreated, *actor, project_id))
            .unwrap();
        added.push(id);
        assert_eq!(store.activities()[0].id(), id);
    }

    let head: Vec<Uuid> = store.activities()[..3].iter().map(|activity| activity.id()).collect();
    added.reverse();
    assert_eq!(head, added);
    assert_eq!(store.activities().len(), 10);
}

#[test]
fn feed_for_current_user_hides_own_entries_for_every_selection() {
    let mut store = seeded_store();
    store.load_mock_activities().unwrap();
    let user_ids: Vec<Uuid> = store.users().iter().map(|user| user.id).collect();

    for user_id in user_ids {
        store.switch_user(user_id).unwrap();
        let visible = store.activities_for_current_user();
        let expected = store
            .activities()
            .iter()
            .filter(|activity| activity.actor_id() != user_id)
            .count();

        assert_eq!(visible.len(), expected);
        assert!(visible.iter().all(|activity| activity.actor_id() != user_id));
    }
}

#[test]
fn completed_by_teammate_shows_at_head_with_first_name() {
    let mut store = seeded_store();
    store.switch_user(store.users()[0].id).unwrap();
    let david = store.users()[2].clone();
    let project_id = store.projects()[0].id;

    store
        .add_activity(NewActivity::new(
            ActivityKind::TaskCompleted,
            david.id,
            project_id,
        ))
        .unwrap();

    let feed = store.activities_for_current_user();
    let head = feed.first().unwrap();
    assert_eq!(head.kind(), ActivityKind::TaskCompleted);
    assert!(store.describe_activity(head).starts_with("David"));
    assert_eq!(head.icon(), "checkmark.circle.fill");
    assert_eq!(head.color(), "green");
}

#[test]
fn describe_activity_resolves_task_title_and_message_preview() {
    let mut store = seeded_store();
    let marcus = store.users()[0].id;
    let riverside = store.projects()[0];
    let (project_id, framing_id) = (riverside.id, riverside.tasks[1].id);

    let assigned = store
        .add_activity(
            NewActivity::new(ActivityKind::TaskAssigned, marcus, project_id).with_task(framing_id),
        )
        .unwrap();
    let message = store
        .add_activity(
            NewActivity::new(ActivityKind::MessageSent, marcus, project_id)
                .with_message_preview("Crane arrives at noon"),
        )
        .unwrap();

    let find = |id| {
        store
            .activities()
            .iter()
            .find(|activity| activity.id() == id)
            .unwrap()
    };
    assert_eq!(
        store.describe_activity(find(assigned)),
        "Marcus assigned Frame second floor walls"
    );
    assert_eq!(
        store.describe_activity(find(message)),
        "Marcus: Crane arrives at noon"
    );
}

#[test]
fn add_activity_rejects_unknown_references() {
    let mut store = seeded_store();
    let marcus = store.users()[0].id;
    let riverside_id = store.projects()[0].id;
    let maple_task = store.projects()[1].tasks[0].id;
    let stranger = Uuid::new_v4();
    let missing_project = Uuid::new_v4();

    assert_eq!(
        store.add_activity(NewActivity::new(ActivityKind::TaskCreated, stranger, riverside_id)),
        Err(StoreError::UnknownUser(stranger))
    );
    assert_eq!(
        store.add_activity(NewActivity::new(
            ActivityKind::TaskCreated,
            marcus,
            missing_project
        )),
        Err(StoreError::ProjectNotFound(missing_project))
    );
    assert_eq!(
        store.add_activity(
            NewActivity::new(ActivityKind::TaskAssigned, marcus, riverside_id)
                .with_task(maple_task)
        ),
        Err(StoreError::TaskNotFound {
            project_id: riverside_id,
            task_id: maple_task,
        })
    );
    assert!(store.activities().is_empty());
}
