use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;

use super::{FieldValue, FileRef, Schema};

/// Identifier of a record, unique within its collection and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl From<u64> for RecordId {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Extra information handed to [`Record::build`].
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a, R> {
	/// Moment of the create or edit, used for `added`/`modified` stamps.
	pub now: NaiveDateTime,
	/// The record being replaced, when editing.
	pub previous: Option<&'a R>,
}

/// One row of domain data backing a screen.
pub trait Record: Clone + Send + 'static {
	fn id(&self) -> RecordId;

	/// Field layout shared by every record of this type.
	fn schema() -> &'static Schema;

	/// Read a field by name. Returns `None` for names the schema does not declare.
	fn field(&self, name: &str) -> Option<FieldValue>;

	/// Construct a record from validated form values.
	///
	/// Implementations must keep `id` and should carry over read-only fields
	/// from `context.previous` when editing.
	fn build(id: RecordId, values: &FieldValues, context: BuildContext<'_, Self>) -> Self;

	/// Short human label used in notifications and share dialogs.
	fn label(&self) -> String {
		Self::schema()
			.label_field()
			.and_then(|def| self.field(def.name))
			.map(|value| value.display())
			.filter(|label| !label.is_empty())
			.unwrap_or_else(|| format!("#{}", self.id()))
	}
}

/// Validated, typed output of a form keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
	values: IndexMap<&'static str, FieldValue>,
}

impl FieldValues {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: &'static str, value: FieldValue) {
		self.values.insert(name, value);
	}

	/// Builder-style variant of [`FieldValues::insert`].
	#[must_use]
	pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
		self.insert(name, value);
		self
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.values.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
		self.values.iter().map(|(name, value)| (*name, value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Text or choice value; other kinds use their display form.
	#[must_use]
	pub fn text(&self, name: &str) -> String {
		match self.values.get(name) {
			Some(FieldValue::Text(value) | FieldValue::Choice(value)) => value.clone(),
			Some(other) => other.display(),
			None => String::new(),
		}
	}

	#[must_use]
	pub fn number(&self, name: &str) -> i64 {
		match self.values.get(name) {
			Some(FieldValue::Number(value)) => *value,
			_ => 0,
		}
	}

	#[must_use]
	pub fn flag(&self, name: &str) -> bool {
		matches!(self.values.get(name), Some(FieldValue::Flag(true)))
	}

	#[must_use]
	pub fn date(&self, name: &str) -> Option<NaiveDate> {
		match self.values.get(name) {
			Some(FieldValue::Date(value)) => *value,
			Some(FieldValue::Timestamp(stamp)) => Some(stamp.date()),
			_ => None,
		}
	}

	#[must_use]
	pub fn timestamp(&self, name: &str) -> Option<NaiveDateTime> {
		match self.values.get(name) {
			Some(FieldValue::Timestamp(stamp)) => Some(*stamp),
			_ => None,
		}
	}

	#[must_use]
	pub fn file(&self, name: &str) -> Option<FileRef> {
		match self.values.get(name) {
			Some(FieldValue::File(value)) => value.clone(),
			_ => None,
		}
	}
}
