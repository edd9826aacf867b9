use chrono::NaiveDate;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

use crate::{STATUSES, day};

/// Project priority, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
	Low,
	Medium,
	High,
}

impl Priority {
	pub const LABELS: &'static [&'static str] = &["Low", "Medium", "High"];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Low => "Low",
			Self::Medium => "Medium",
			Self::High => "High",
		}
	}

	/// Unknown labels fall back to [`Priority::Medium`].
	#[must_use]
	pub fn from_label(label: &str) -> Self {
		match label {
			"Low" => Self::Low,
			"High" => Self::High,
			_ => Self::Medium,
		}
	}
}

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Project", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("owner", "Owner", FieldKind::Text)
		.required()
		.width(2),
	FieldDef::new("status", "Status", FieldKind::Choice(STATUSES))
		.required()
		.width(2),
	FieldDef::new("priority", "Priority", FieldKind::Choice(Priority::LABELS)).required(),
	FieldDef::new("start_date", "Start", FieldKind::Date),
	FieldDef::new("due_date", "Due", FieldKind::Date).required(),
	FieldDef::new("budget", "Budget ($)", FieldKind::Number),
];

pub static PROJECT_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
	pub id: RecordId,
	pub name: String,
	pub owner: String,
	pub status: String,
	pub priority: Priority,
	pub start_date: Option<NaiveDate>,
	pub due_date: Option<NaiveDate>,
	pub budget: i64,
}

impl Record for Project {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&PROJECT_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"owner" => FieldValue::text(&self.owner),
			"status" => FieldValue::choice(&self.status),
			"priority" => FieldValue::choice(self.priority.label()),
			"start_date" => FieldValue::Date(self.start_date),
			"due_date" => FieldValue::Date(self.due_date),
			"budget" => FieldValue::Number(self.budget),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			owner: values.text("owner"),
			status: values.text("status"),
			priority: Priority::from_label(&values.text("priority")),
			start_date: values.date("start_date"),
			due_date: values.date("due_date"),
			budget: values.number("budget"),
		}
	}
}

pub(crate) fn seed() -> Vec<Project> {
	[
		(1, "Mobile App Launch", "Elena Petrova", "In Progress", Priority::High, day(2024, 1, 8), day(2024, 6, 30), 120_000),
		(2, "Data Warehouse Migration", "Marcus Green", "Planned", Priority::Medium, day(2024, 4, 1), day(2024, 9, 15), 85_000),
		(3, "Website Redesign", "Yuki Tanaka", "In Progress", Priority::High, day(2024, 2, 12), day(2024, 5, 10), 45_000),
		(4, "Security Audit", "Marcus Green", "On Hold", Priority::Low, None, day(2024, 7, 1), 20_000),
		(5, "Customer Portal", "Elena Petrova", "Completed", Priority::Medium, day(2023, 9, 4), day(2024, 1, 31), 60_000),
		(6, "Office Network Upgrade", "Yuki Tanaka", "Planned", Priority::Low, day(2024, 5, 6), day(2024, 6, 14), 15_000),
	]
	.into_iter()
	.map(
		|(id, name, owner, status, priority, start_date, due_date, budget)| Project {
			id: RecordId(id),
			name: name.to_string(),
			owner: owner.to_string(),
			status: status.to_string(),
			priority,
			start_date,
			due_date,
			budget,
		},
	)
	.collect()
}
