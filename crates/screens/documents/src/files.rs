use chrono::NaiveDateTime;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, RecentKey, Record, RecordId,
	Schema,
};

use crate::at;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
	Pdf,
	Doc,
	Sheet,
	Image,
	Other,
}

impl FileKind {
	pub const LABELS: &'static [&'static str] = &["PDF", "Doc", "Sheet", "Image", "Other"];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Pdf => "PDF",
			Self::Doc => "Doc",
			Self::Sheet => "Sheet",
			Self::Image => "Image",
			Self::Other => "Other",
		}
	}

	/// Unknown labels map to [`FileKind::Other`].
	#[must_use]
	pub fn from_label(label: &str) -> Self {
		match label {
			"PDF" => Self::Pdf,
			"Doc" => Self::Doc,
			"Sheet" => Self::Sheet,
			"Image" => Self::Image,
			_ => Self::Other,
		}
	}
}

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Name", FieldKind::Text)
		.required()
		.width(4),
	FieldDef::new("folder", "Folder", FieldKind::Text)
		.required()
		.width(2),
	FieldDef::new("owner", "Owner", FieldKind::Text).width(2),
	FieldDef::new("kind", "Type", FieldKind::Choice(FileKind::LABELS)).required(),
	FieldDef::new("size_kb", "Size (KB)", FieldKind::Number),
	FieldDef::new("starred", "Starred", FieldKind::Flag),
	FieldDef::new("added_on", "Added", FieldKind::Timestamp)
		.read_only()
		.width(2),
	FieldDef::new("modified_on", "Modified", FieldKind::Timestamp)
		.read_only()
		.width(2),
];

pub static FILE_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[
		RecentKey {
			name: "added",
			label: "Recently added",
			field: "added_on",
		},
		RecentKey {
			name: "modified",
			label: "Recently modified",
			field: "modified_on",
		},
	],
};

/// A document stored in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
	pub id: RecordId,
	pub name: String,
	pub folder: String,
	pub owner: String,
	pub kind: FileKind,
	pub size_kb: i64,
	pub starred: bool,
	pub added_on: NaiveDateTime,
	pub modified_on: NaiveDateTime,
}

impl Record for StoredFile {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&FILE_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"folder" => FieldValue::text(&self.folder),
			"owner" => FieldValue::text(&self.owner),
			"kind" => FieldValue::choice(self.kind.label()),
			"size_kb" => FieldValue::Number(self.size_kb),
			"starred" => FieldValue::Flag(self.starred),
			"added_on" => FieldValue::Timestamp(self.added_on),
			"modified_on" => FieldValue::Timestamp(self.modified_on),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			folder: values.text("folder"),
			owner: values.text("owner"),
			kind: FileKind::from_label(&values.text("kind")),
			size_kb: values.number("size_kb"),
			starred: values.flag("starred"),
			added_on: context
				.previous
				.map_or(context.now, |previous| previous.added_on),
			modified_on: context.now,
		}
	}
}

#[allow(clippy::too_many_arguments)]
fn file(
	id: u64,
	name: &str,
	folder: &str,
	owner: &str,
	kind: FileKind,
	size_kb: i64,
	starred: bool,
	added_on: NaiveDateTime,
	modified_on: NaiveDateTime,
) -> StoredFile {
	StoredFile {
		id: RecordId(id),
		name: name.to_string(),
		folder: folder.to_string(),
		owner: owner.to_string(),
		kind,
		size_kb,
		starred,
		added_on,
		modified_on,
	}
}

pub(crate) fn seed() -> Vec<StoredFile> {
	vec![
		file(
			1,
			"Annual Report 2024.pdf",
			"Reports",
			"Alice Johnson",
			FileKind::Pdf,
			2_450,
			true,
			at(2024, 1, 15, 9, 30),
			at(2024, 2, 2, 11, 0),
		),
		file(
			2,
			"Marketing Plan.docx",
			"Marketing",
			"Bob Smith",
			FileKind::Doc,
			820,
			false,
			at(2024, 2, 3, 14, 10),
			at(2024, 2, 20, 16, 45),
		),
		file(
			3,
			"Budget Forecast.xlsx",
			"Finance",
			"Carol Davis",
			FileKind::Sheet,
			1_310,
			true,
			at(2024, 1, 28, 8, 5),
			at(2024, 3, 1, 10, 20),
		),
		file(
			4,
			"Team Photo.png",
			"Media",
			"Design Team",
			FileKind::Image,
			5_600,
			false,
			at(2024, 3, 5, 12, 0),
			at(2024, 3, 5, 12, 0),
		),
		file(
			5,
			"Client Contract.pdf",
			"Legal",
			"Alice Johnson",
			FileKind::Pdf,
			640,
			false,
			at(2023, 12, 11, 17, 25),
			at(2024, 1, 9, 9, 0),
		),
		file(
			6,
			"Onboarding Checklist.docx",
			"HR",
			"Bob Smith",
			FileKind::Doc,
			95,
			false,
			at(2024, 2, 14, 10, 40),
			at(2024, 2, 14, 10, 40),
		),
		file(
			7,
			"Release Notes.txt",
			"Engineering",
			"Carol Davis",
			FileKind::Other,
			12,
			true,
			at(2024, 3, 9, 18, 15),
			at(2024, 3, 10, 9, 5),
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_round_trip() {
		for label in FileKind::LABELS {
			assert_eq!(FileKind::from_label(label).label(), *label);
		}
		assert_eq!(FileKind::from_label("zip"), FileKind::Other);
	}

	#[test]
	fn edits_keep_the_added_stamp_and_touch_modified() {
		let original = seed().remove(0);
		let values = FieldValues::new()
			.with("name", FieldValue::text("Annual Report 2024 v2.pdf"))
			.with("folder", FieldValue::text("Reports"))
			.with("kind", FieldValue::choice("PDF"));
		let now = at(2024, 4, 1, 8, 0);
		let edited = StoredFile::build(
			original.id,
			&values,
			BuildContext {
				now,
				previous: Some(&original),
			},
		);
		assert_eq!(edited.added_on, original.added_on);
		assert_eq!(edited.modified_on, now);
		assert_eq!(edited.kind, FileKind::Pdf);
	}

	#[test]
	fn seed_ids_are_unique() {
		let mut ids: Vec<_> = seed().iter().map(|file| file.id).collect();
		ids.dedup();
		assert_eq!(ids.len(), seed().len());
	}
}
