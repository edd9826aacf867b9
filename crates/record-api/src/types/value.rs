use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Canonical date form used for display, filtering and form input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Canonical timestamp form used for display and form input.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Reference to an attached file by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileRef {
	pub name: String,
}

impl FileRef {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// A single typed field value read from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
	Text(String),
	Number(i64),
	Flag(bool),
	Choice(String),
	Date(Option<NaiveDate>),
	Timestamp(NaiveDateTime),
	File(Option<FileRef>),
}

impl FieldValue {
	/// Build a text value.
	#[must_use]
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	/// Build a choice value.
	#[must_use]
	pub fn choice(value: impl Into<String>) -> Self {
		Self::Choice(value.into())
	}

	/// String representation used for rendering and substring filters.
	#[must_use]
	pub fn display(&self) -> String {
		match self {
			Self::Text(value) | Self::Choice(value) => value.clone(),
			Self::Number(value) => value.to_string(),
			Self::Flag(value) => flag_label(*value).to_string(),
			Self::Date(Some(date)) => date.format(DATE_FORMAT).to_string(),
			Self::Date(None) | Self::File(None) => String::new(),
			Self::Timestamp(stamp) => stamp.format(TIMESTAMP_FORMAT).to_string(),
			Self::File(Some(file)) => file.name.clone(),
		}
	}

	/// Canonical `YYYY-MM-DD` form of date-like values.
	///
	/// Timestamps contribute their date part so that a date filter selects
	/// every record stamped on that day.
	#[must_use]
	pub fn date_key(&self) -> Option<String> {
		match self {
			Self::Date(Some(date)) => Some(date.format(DATE_FORMAT).to_string()),
			Self::Timestamp(stamp) => Some(stamp.date().format(DATE_FORMAT).to_string()),
			_ => None,
		}
	}

	/// Order two values of the same kind.
	///
	/// Text compares case-insensitively and missing dates or files sort first.
	/// Values of different kinds fall back to their display form.
	#[must_use]
	pub fn compare(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) | (Self::Choice(a), Self::Choice(b)) => {
				a.to_lowercase().cmp(&b.to_lowercase())
			}
			(Self::Number(a), Self::Number(b)) => a.cmp(b),
			(Self::Flag(a), Self::Flag(b)) => a.cmp(b),
			(Self::Date(a), Self::Date(b)) => a.cmp(b),
			(Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
			(Self::File(a), Self::File(b)) => {
				let a = a.as_ref().map(|file| file.name.to_lowercase());
				let b = b.as_ref().map(|file| file.name.to_lowercase());
				a.cmp(&b)
			}
			_ => self.display().cmp(&other.display()),
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display())
	}
}

/// Label shown for boolean values in tables and form toggles.
#[must_use]
pub(crate) const fn flag_label(value: bool) -> &'static str {
	if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn display_uses_canonical_forms() {
		let stamp = date(2024, 3, 9).and_hms_opt(14, 5, 0).unwrap();
		assert_eq!(FieldValue::Date(Some(date(2024, 3, 9))).display(), "2024-03-09");
		assert_eq!(FieldValue::Timestamp(stamp).display(), "2024-03-09 14:05");
		assert_eq!(FieldValue::Flag(true).display(), "Yes");
		assert_eq!(FieldValue::Date(None).display(), "");
		assert_eq!(FieldValue::File(Some(FileRef::new("a.pdf"))).display(), "a.pdf");
	}

	#[test]
	fn timestamps_expose_their_date_part() {
		let stamp = date(2024, 1, 2).and_hms_opt(23, 59, 0).unwrap();
		assert_eq!(
			FieldValue::Timestamp(stamp).date_key().as_deref(),
			Some("2024-01-02")
		);
		assert_eq!(FieldValue::text("x").date_key(), None);
	}

	#[test]
	fn compare_is_case_insensitive_for_text() {
		let a = FieldValue::text("apple");
		let b = FieldValue::text("Banana");
		assert_eq!(a.compare(&b), Ordering::Less);
		assert_eq!(
			FieldValue::Date(None).compare(&FieldValue::Date(Some(date(2020, 1, 1)))),
			Ordering::Less
		);
	}

	#[test]
	fn values_serialize_untagged() {
		let json = serde_json::to_string(&FieldValue::Date(Some(date(2024, 5, 1)))).unwrap();
		assert_eq!(json, "\"2024-05-01\"");
		let json = serde_json::to_string(&FieldValue::Number(7)).unwrap();
		assert_eq!(json, "7");
	}
}
