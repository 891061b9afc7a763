//! Demo fixture data for a freshly installed app.
//!
//! Projects and activities are generated relative to a caller-supplied `now`
//! so relative labels ("3h ago") stay stable across launches.

use crate::model::activity::{Activity, ActivityKind};
use crate::model::project::{Message, Project, ProjectAttachment};
use crate::model::task::{
    Attachment, AttachmentCategory, AttachmentKind, Subtask, Task, TaskStatus,
};
use crate::model::user::{User, UserId};
use std::collections::{BTreeMap, BTreeSet};

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// The fixed crew every demo install starts with.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("Marcus Johnson", "+1 (555) 201-0101"),
        User::new("Elena Rodriguez", "+1 (555) 201-0102"),
        User::new("David Chen", "+1 (555) 201-0103"),
        User::new("Sarah Mitchell", "+1 (555) 201-0104"),
        User::new("James Wilson", "+1 (555) 201-0105"),
    ]
}

/// Builds the sample projects. Users are picked by position, wrapping when
/// fewer than five are given. Returns nothing for an empty user list.
pub fn mock_projects(users: &[User], now_ms: i64) -> Vec<Project> {
    if users.is_empty() {
        return Vec::new();
    }
    let pick = |index: usize| users[index % users.len()].id;

    vec![
        riverside_office(pick, now_ms),
        maple_street(pick, now_ms),
        harbor_view(pick, now_ms),
    ]
}

/// Builds the sample feed, most recent first, over the first two projects.
///
/// Returns nothing when fewer than two projects are given.
pub fn mock_activities(users: &[User], projects: &[&Project], now_ms: i64) -> Vec<Activity> {
    let (Some(&first), Some(&second)) = (projects.first(), projects.get(1)) else {
        return Vec::new();
    };
    if users.is_empty() {
        return Vec::new();
    }
    let pick = |index: usize| users[index % users.len()].id;
    let task_of = |project: &Project, index: usize| project.tasks.get(index).map(|task| task.id);

    vec![
        Activity::new(
            ActivityKind::MessageSent,
            now_ms - 3 * HOUR_MS,
            pick(1),
            first.id,
            None,
            Some("Need the framing plan revision before Thursday.".to_string()),
        ),
        Activity::new(
            ActivityKind::TaskAssigned,
            now_ms - 6 * HOUR_MS,
            pick(0),
            second.id,
            task_of(second, 1),
            None,
        ),
        Activity::new(
            ActivityKind::TaskCompleted,
            now_ms - DAY_MS,
            pick(2),
            first.id,
            task_of(first, 0),
            None,
        ),
        Activity::new(
            ActivityKind::MessageSent,
            now_ms - 26 * HOUR_MS,
            pick(0),
            first.id,
            None,
            Some("Concrete truck confirmed for 7am.".to_string()),
        ),
        Activity::new(
            ActivityKind::TaskCreated,
            now_ms - 28 * HOUR_MS,
            pick(3),
            first.id,
            task_of(first, 2),
            None,
        ),
        Activity::new(
            ActivityKind::TaskCompleted,
            now_ms - 2 * DAY_MS,
            pick(4),
            second.id,
            task_of(second, 0),
            None,
        ),
        Activity::new(
            ActivityKind::TaskReopened,
            now_ms - 3 * DAY_MS,
            pick(1),
            first.id,
            task_of(first, 1),
            None,
        ),
    ]
}

fn riverside_office(pick: impl Fn(usize) -> UserId, now_ms: i64) -> Project {
    let mut project = Project::new(
        "Riverside Office Complex",
        "Three-story office build on the east bank lot.",
        pick(0),
        now_ms - 14 * DAY_MS,
    );
    project.members.extend([pick(1), pick(2), pick(3)]);

    let mut footings = Task::new("Pour foundation footings", pick(0));
    footings.assignees = BTreeSet::from([pick(1), pick(2)]);
    footings.status = TaskStatus::Done;
    footings.due_date = Some(now_ms - 2 * DAY_MS);
    footings.subtasks = vec![
        done_subtask("Set rebar cages", pick(0)),
        done_subtask("Schedule concrete truck", pick(0)),
    ];
    let mut pour_photo = Attachment::new(
        AttachmentKind::Image,
        AttachmentCategory::Work,
        "footings_pour.jpg",
        2_450_000,
        pick(2),
    );
    pour_photo.caption = Some("East footing after pour".to_string());
    footings.attachments.push(pour_photo);
    footings.acknowledged_by = BTreeSet::from([pick(1), pick(2)]);

    let mut framing = Task::new("Frame second floor walls", pick(0));
    framing.assignees = BTreeSet::from([pick(2), pick(3)]);
    framing.due_date = Some(now_ms + 3 * DAY_MS);
    framing.subtasks = vec![
        done_subtask("Stage lumber", pick(0)),
        Subtask::new("Snap chalk lines", pick(0)),
    ];
    framing.attachments.push(Attachment::new(
        AttachmentKind::Document,
        AttachmentCategory::Reference,
        "floor2_framing_plan.pdf",
        1_200_000,
        pick(0),
    ));
    framing.acknowledged_by = BTreeSet::from([pick(2)]);

    let mut inspection = Task::new("Inspect electrical rough-in", pick(3));
    inspection.assignees = BTreeSet::from([pick(1)]);
    inspection.due_date = Some(now_ms + 5 * DAY_MS);
    inspection.notes = "City inspector arrives 9am. Panel covers off.".to_string();

    let mut footing_report = ProjectAttachment::new(
        AttachmentKind::Image,
        "footing_inspection.jpg",
        1_830_000,
        pick(2),
        now_ms - 30 * HOUR_MS,
    );
    footing_report.linked_task_id = Some(footings.id);
    project.attachments = vec![
        ProjectAttachment::new(
            AttachmentKind::Document,
            "site_plan_rev3.pdf",
            3_400_000,
            pick(0),
            now_ms - 5 * DAY_MS,
        ),
        footing_report,
    ];

    project.unread_task_ids = BTreeMap::from([
        (pick(0), BTreeSet::from([inspection.id])),
        (pick(1), BTreeSet::from([framing.id])),
        (pick(3), BTreeSet::from([framing.id])),
    ]);
    project.tasks = vec![footings, framing, inspection];
    project.messages = vec![
        Message::new("Concrete truck confirmed for 7am.", pick(0), now_ms - 26 * HOUR_MS),
        Message::new(
            "Footings look good, photos uploaded.",
            pick(2),
            now_ms - 20 * HOUR_MS,
        ),
        Message::new(
            "Need the framing plan revision before Thursday.",
            pick(1),
            now_ms - 3 * HOUR_MS,
        ),
    ];
    touch_from_latest_message(&mut project);
    project
}

fn maple_street(pick: impl Fn(usize) -> UserId, now_ms: i64) -> Project {
    let mut project = Project::new(
        "Maple Street Renovation",
        "Kitchen and bath remodel for a 1960s ranch house.",
        pick(1),
        now_ms - 10 * DAY_MS,
    );
    project.members.extend([pick(0), pick(4)]);

    let mut demo = Task::new("Demo kitchen cabinets", pick(1));
    demo.assignees = BTreeSet::from([pick(4)]);
    demo.status = TaskStatus::Done;
    demo.acknowledged_by = BTreeSet::from([pick(4)]);

    let mut subfloor = Task::new("Replace subfloor", pick(1));
    subfloor.assignees = BTreeSet::from([pick(4), pick(0)]);
    subfloor.due_date = Some(now_ms + 2 * DAY_MS);
    subfloor.subtasks = vec![
        done_subtask("Pull old plywood", pick(4)),
        Subtask::new("Check joists for rot", pick(1)),
        Subtask::new("Lay new sheathing", pick(1)),
    ];
    let mut damage_photo = Attachment::new(
        AttachmentKind::Image,
        AttachmentCategory::Reference,
        "subfloor_damage.jpg",
        2_100_000,
        pick(4),
    );
    damage_photo.caption = Some("Water damage near sink".to_string());
    subfloor.attachments.push(damage_photo);
    subfloor.acknowledged_by = BTreeSet::from([pick(4)]);

    let mut tile = Task::new("Order tile samples", pick(0));
    tile.assignees = BTreeSet::from([pick(0)]);

    let mut layout = ProjectAttachment::new(
        AttachmentKind::Document,
        "kitchen_layout.pdf",
        860_000,
        pick(1),
        now_ms - 9 * DAY_MS,
    );
    layout.linked_task_id = Some(tile.id);
    project.attachments = vec![layout];

    project.unread_task_ids = BTreeMap::from([
        (pick(0), BTreeSet::from([subfloor.id])),
        (pick(4), BTreeSet::from([tile.id])),
    ]);
    project.tasks = vec![demo, subfloor, tile];
    project.messages = vec![
        Message::new(
            "Cabinets are out, dumpster is full.",
            pick(4),
            now_ms - 2 * DAY_MS,
        ),
        Message::new(
            "Swap scheduled for tomorrow morning.",
            pick(1),
            now_ms - 40 * HOUR_MS,
        ),
    ];
    touch_from_latest_message(&mut project);
    project
}

fn harbor_view(pick: impl Fn(usize) -> UserId, now_ms: i64) -> Project {
    let mut project = Project::new(
        "Harbor View Condos",
        "Site prep for a twelve-unit waterfront building.",
        pick(3),
        now_ms - 20 * DAY_MS,
    );
    project.members.extend([pick(0), pick(2), pick(4)]);

    let mut survey = Task::new("Survey lot boundaries", pick(0));
    survey.assignees = BTreeSet::from([pick(3)]);
    survey.due_date = Some(now_ms + 7 * DAY_MS);

    let mut permit = Task::new("Submit permit application", pick(3));
    permit.assignees = BTreeSet::from([pick(0)]);
    permit.status = TaskStatus::Done;
    permit.acknowledged_by = BTreeSet::from([pick(0)]);

    project.unread_task_ids = BTreeMap::from([(pick(2), BTreeSet::from([survey.id]))]);
    project.tasks = vec![survey, permit];
    project.messages = vec![Message::new(
        "Permit packet submitted to the county.",
        pick(3),
        now_ms - 4 * DAY_MS,
    )];
    touch_from_latest_message(&mut project);
    project
}

fn done_subtask(title: &str, created_by: UserId) -> Subtask {
    let mut subtask = Subtask::new(title, created_by);
    subtask.is_done = true;
    subtask
}

fn touch_from_latest_message(project: &mut Project) {
    if let Some((at, preview)) = project
        .latest_message()
        .map(|message| (message.sent_at, message.content.clone()))
    {
        project.touch(at, preview);
    }
}
