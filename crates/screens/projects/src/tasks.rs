use chrono::NaiveDate;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

use crate::{STATUSES, day};

static FIELDS: &[FieldDef] = &[
	FieldDef::new("title", "Task", FieldKind::Text)
		.required()
		.width(4),
	FieldDef::new("project", "Project", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("assignee", "Assignee", FieldKind::Text).width(2),
	FieldDef::new("status", "Status", FieldKind::Choice(STATUSES))
		.required()
		.width(2),
	FieldDef::new("due_date", "Due", FieldKind::Date),
];

pub static TASK_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
	pub id: RecordId,
	pub title: String,
	pub project: String,
	pub assignee: String,
	pub status: String,
	pub due_date: Option<NaiveDate>,
}

impl Record for Task {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&TASK_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"title" => FieldValue::text(&self.title),
			"project" => FieldValue::text(&self.project),
			"assignee" => FieldValue::text(&self.assignee),
			"status" => FieldValue::choice(&self.status),
			"due_date" => FieldValue::Date(self.due_date),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			title: values.text("title"),
			project: values.text("project"),
			assignee: values.text("assignee"),
			status: values.text("status"),
			due_date: values.date("due_date"),
		}
	}
}

pub(crate) fn seed() -> Vec<Task> {
	[
		(1, "Wireframe landing page", "Website Redesign", "Yuki Tanaka", "Completed", day(2024, 2, 28)),
		(2, "Set up CI pipeline", "Mobile App Launch", "Marcus Green", "In Progress", day(2024, 3, 22)),
		(3, "Write API contracts", "Mobile App Launch", "Elena Petrova", "Planned", day(2024, 4, 5)),
		(4, "Migrate blog content", "Website Redesign", "Yuki Tanaka", "In Progress", day(2024, 4, 12)),
		(5, "Inventory legacy tables", "Data Warehouse Migration", "Marcus Green", "Planned", None),
		(6, "Accessibility review", "Website Redesign", "Elena Petrova", "Planned", day(2024, 4, 30)),
		(7, "Pen-test scoping call", "Security Audit", "", "On Hold", None),
	]
	.into_iter()
	.map(|(id, title, project, assignee, status, due_date)| Task {
		id: RecordId(id),
		title: title.to_string(),
		project: project.to_string(),
		assignee: assignee.to_string(),
		status: status.to_string(),
		due_date,
	})
	.collect()
}
