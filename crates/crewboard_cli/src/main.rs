//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging, preferences and the crew store the way an app
//!   shell does on launch.
//! - Print the seeded feed so core behavior can be eyeballed without a UI.

use crewboard_core::db::open_db;
use crewboard_core::model::now_epoch_ms;
use crewboard_core::{
    core_version, init_logging, CoreConfig, CrewStore, LaunchService, SqliteFlagRepository,
};
use log::warn;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crewboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }
    println!("crewboard_core version={}", core_version());

    let conn = open_db(&config.db_path)?;
    let launch = LaunchService::new(SqliteFlagRepository::new(&conn));
    if launch.should_show_onboarding()? {
        println!("first launch: onboarding would be shown");
        launch.mark_launched()?;
    }

    let mut store = CrewStore::new();
    store.load_projects();
    if let Err(err) = store.load_mock_activities() {
        warn!("event=seed module=cli status=error error={err}");
    }

    let viewer = store.current_user();
    println!(
        "viewing as {} ({} unread tasks)",
        viewer.first_name(),
        store.unread_task_count_for_current_user()
    );
    let now = now_epoch_ms();
    for project in store.projects_for_current_user() {
        let overdue = project
            .tasks
            .iter()
            .filter(|task| task.is_overdue(now))
            .count();
        println!(
            "project {:<28} open={} overdue={} members={}",
            project.name,
            project.open_task_count(),
            overdue,
            project.members.len()
        );
    }
    for activity in store.activities_for_current_user() {
        println!(
            "[{}] {}",
            activity.kind().icon(),
            store.describe_activity(activity)
        );
    }

    Ok(())
}
