use crewboard_core::{
    Activity, ActivityKind, AttachmentCategory, AttachmentKind, CrewStore, Project, TaskStatus,
};
use uuid::Uuid;

#[test]
fn activity_serializes_snake_case_kind_and_roundtrips() {
    let activity = Activity::new(
        ActivityKind::TaskReopened,
        1_700_000_000_000,
        Uuid::new_v4(),
        Uuid::new_v4(),
        None,
        None,
    );

    let json = serde_json::to_value(&activity).unwrap();
    assert_eq!(json["kind"], "task_reopened");
    assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
    assert!(json["task_id"].is_null());

    let decoded: Activity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, activity);
}

#[test]
fn seeded_project_serializes_nested_records() {
    let mut store = CrewStore::new();
    store.load_projects();
    let project = store.projects()[0].clone();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["tasks"][0]["status"], "done");
    assert_eq!(json["tasks"][0]["attachments"][0]["kind"], "image");
    assert_eq!(json["tasks"][0]["attachments"][0]["category"], "work");
    let marcus = store.users()[0].id.to_string();
    assert!(json["unread_task_ids"][marcus.as_str()].is_array());

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
    assert_eq!(decoded.tasks[0].status, TaskStatus::Done);
    assert_eq!(decoded.tasks[0].attachments[0].kind, AttachmentKind::Image);
    assert_eq!(
        decoded.tasks[0].attachments[0].category,
        AttachmentCategory::Work
    );
}
