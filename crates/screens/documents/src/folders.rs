use chrono::NaiveDateTime;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

use crate::at;

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Folder name", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("owner", "Owner", FieldKind::Text).width(2),
	FieldDef::new("created_on", "Created", FieldKind::Timestamp)
		.read_only()
		.width(2),
];

pub static FOLDER_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
	pub id: RecordId,
	pub name: String,
	pub owner: String,
	pub created_on: NaiveDateTime,
}

impl Record for Folder {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&FOLDER_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"owner" => FieldValue::text(&self.owner),
			"created_on" => FieldValue::Timestamp(self.created_on),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			owner: values.text("owner"),
			created_on: context
				.previous
				.map_or(context.now, |previous| previous.created_on),
		}
	}
}

pub(crate) fn seed() -> Vec<Folder> {
	[
		(1, "Reports", "Alice Johnson", at(2023, 11, 2, 9, 0)),
		(2, "Marketing", "Bob Smith", at(2023, 11, 20, 13, 30)),
		(3, "Finance", "Carol Davis", at(2024, 1, 4, 8, 45)),
	]
	.into_iter()
	.map(|(id, name, owner, created_on)| Folder {
		id: RecordId(id),
		name: name.to_string(),
		owner: owner.to_string(),
		created_on,
	})
	.collect()
}
