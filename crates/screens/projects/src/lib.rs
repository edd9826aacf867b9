//! Project-management console.

mod projects;
mod tasks;

pub use projects::{PROJECT_SCHEMA, Priority, Project};
pub use tasks::{TASK_SCHEMA, Task};

use chrono::NaiveDate;
use tabula_record_api::{Collection, RecordScreen, Screen, ScreenDescriptor, ScreenUiDefinition};

pub const GROUP: &str = "projects";

pub static RECIPIENTS: &[&str] = &["Elena Petrova", "Marcus Green", "Yuki Tanaka", "PMO"];

/// Status options shared by projects and tasks.
pub(crate) const STATUSES: &[&str] = &["Planned", "In Progress", "On Hold", "Completed"];

pub static PROJECTS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "projects",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Projects",
		title: "Project portfolio",
		hint: "Search projects by name or owner",
		count_label: "projects",
		noun: "project",
	},
};

pub static TASKS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "tasks",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Tasks",
		title: "Task board",
		hint: "Search tasks by title, project or assignee",
		count_label: "tasks",
		noun: "task",
	},
};

#[must_use]
pub fn projects_screen() -> RecordScreen<Project> {
	RecordScreen::new(PROJECTS_DESCRIPTOR, Collection::seeded(projects::seed()))
		.with_recipients(RECIPIENTS)
}

#[must_use]
pub fn tasks_screen() -> RecordScreen<Task> {
	RecordScreen::new(TASKS_DESCRIPTOR, Collection::seeded(tasks::seed()))
		.with_recipients(RECIPIENTS)
}

#[must_use]
pub fn screens() -> Vec<Box<dyn Screen>> {
	vec![Box::new(projects_screen()), Box::new(tasks_screen())]
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
	NaiveDate::from_ymd_opt(year, month, day)
}
