use chrono::NaiveDate;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, FileRef, Record, RecordId, Schema,
};

use crate::day;

const STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];

static FIELDS: &[FieldDef] = &[
	FieldDef::new("client", "Client", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("executive", "Executive", FieldKind::Text)
		.required()
		.width(2),
	FieldDef::new("visit_date", "Visit date", FieldKind::Date).required(),
	FieldDef::new("purpose", "Purpose", FieldKind::Text).width(3),
	FieldDef::new("status", "Status", FieldKind::Choice(STATUSES)).required(),
	FieldDef::new("attachment", "Attachment", FieldKind::File).width(2),
];

pub static VISIT_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
	pub id: RecordId,
	pub client: String,
	pub executive: String,
	pub visit_date: Option<NaiveDate>,
	pub purpose: String,
	pub status: String,
	pub attachment: Option<FileRef>,
}

impl Record for Visit {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&VISIT_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"client" => FieldValue::text(&self.client),
			"executive" => FieldValue::text(&self.executive),
			"visit_date" => FieldValue::Date(self.visit_date),
			"purpose" => FieldValue::text(&self.purpose),
			"status" => FieldValue::choice(&self.status),
			"attachment" => FieldValue::File(self.attachment.clone()),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			client: values.text("client"),
			executive: values.text("executive"),
			visit_date: values.date("visit_date"),
			purpose: values.text("purpose"),
			status: values.text("status"),
			attachment: values.file("attachment"),
		}
	}
}

pub(crate) fn seed() -> Vec<Visit> {
	[
		(1, "Tech Solutions Inc", "Arjun Nair", day(2024, 3, 11), "Quarterly review", "Completed", Some("review-notes.pdf")),
		(2, "Green Valley Healthcare", "Sneha Iyer", day(2024, 3, 19), "Product demo", "Scheduled", None),
		(3, "Summit Finance Group", "Arjun Nair", day(2024, 2, 27), "Contract renewal", "Cancelled", None),
		(4, "BuildRight Manufacturing", "Rahul Mehta", day(2024, 3, 6), "Site inspection", "Completed", Some("site-photos.zip")),
		(5, "Urban Retail Co", "Sneha Iyer", day(2024, 3, 25), "Onboarding workshop", "Scheduled", None),
	]
	.into_iter()
	.map(|(id, client, executive, visit_date, purpose, status, attachment)| Visit {
		id: RecordId(id),
		client: client.to_string(),
		executive: executive.to_string(),
		visit_date,
		purpose: purpose.to_string(),
		status: status.to_string(),
		attachment: attachment.map(FileRef::new),
	})
	.collect()
}
