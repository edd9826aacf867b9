//! Per-field filters and the free-text search applied before sorting.

use indexmap::IndexMap;

use crate::error::ViewError;
use crate::types::{FieldKind, FieldValue, Record, Schema};

/// User-entered search criteria for one screen.
///
/// Entries map a field name to a candidate value. An entry whose value is empty
/// after trimming is inactive, so a freshly cleared filter panel behaves as
/// the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
	entries: IndexMap<&'static str, String>,
	query: String,
}

impl FilterSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the candidate value for a field.
	///
	/// Empty values remove the entry.
	pub fn set(&mut self, schema: &Schema, field: &str, value: &str) -> Result<(), ViewError> {
		let def = schema.field(field).ok_or_else(|| ViewError::UnknownField {
			field: field.to_string(),
		})?;
		if value.trim().is_empty() {
			self.entries.shift_remove(def.name);
		} else {
			self.entries.insert(def.name, value.to_string());
		}
		Ok(())
	}

	/// Apply a `field=value` assignment as typed on the command line.
	pub fn parse_assignment(&mut self, schema: &Schema, raw: &str) -> Result<(), ViewError> {
		let (field, value) = raw
			.split_once('=')
			.ok_or_else(|| ViewError::MalformedFilter {
				raw: raw.to_string(),
			})?;
		self.set(schema, field.trim(), value)
	}

	pub fn clear_field(&mut self, field: &str) {
		self.entries.shift_remove(field);
	}

	/// Replace the free-text query matched against every searchable field.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn get(&self, field: &str) -> Option<&str> {
		self.entries.get(field).map(String::as_str)
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.query.clear();
	}

	/// Iterate over the entries that take part in matching.
	pub fn active(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.entries
			.iter()
			.filter(|(_, value)| !value.trim().is_empty())
			.map(|(field, value)| (*field, value.trim()))
	}

	/// Returns `true` when no entry and no query would reject a record.
	#[must_use]
	pub fn is_identity(&self) -> bool {
		self.query.trim().is_empty() && self.active().next().is_none()
	}

	/// Check a record against every active entry and the free-text query.
	#[must_use]
	pub fn matches<R: Record>(&self, record: &R) -> bool {
		let schema = R::schema();
		let entries_match = self.active().all(|(name, candidate)| {
			match (schema.field(name), record.field(name)) {
				(Some(def), Some(value)) => field_matches(def.kind, &value, candidate),
				_ => false,
			}
		});
		entries_match && self.query_matches(schema, record)
	}

	fn query_matches<R: Record>(&self, schema: &Schema, record: &R) -> bool {
		let needle = self.query.trim();
		if needle.is_empty() {
			return true;
		}
		let needle = needle.to_lowercase();
		schema
			.fields
			.iter()
			.filter(|def| def.kind.is_substring_matched() || def.kind.options().is_some())
			.filter_map(|def| record.field(def.name))
			.any(|value| value.display().to_lowercase().contains(&needle))
	}
}

/// Match one field value against a candidate string using the rule for its kind.
///
/// Text, number and file fields use case-insensitive substring matching. Choice
/// and flag fields require equality, and dates compare by their `YYYY-MM-DD`
/// form. Choice equality ignores ASCII case, so `industry=it` selects `IT`.
#[must_use]
pub fn field_matches(kind: FieldKind, value: &FieldValue, candidate: &str) -> bool {
	let candidate = candidate.trim();
	match kind {
		FieldKind::Text | FieldKind::Number | FieldKind::File => value
			.display()
			.to_lowercase()
			.contains(&candidate.to_lowercase()),
		// Whole-value match; only ASCII case is relaxed.
		FieldKind::Choice(_) => value.display().eq_ignore_ascii_case(candidate),
		FieldKind::Flag => match (value, parse_flag(candidate)) {
			(FieldValue::Flag(actual), Some(wanted)) => *actual == wanted,
			_ => false,
		},
		FieldKind::Date | FieldKind::Timestamp => value
			.date_key()
			.is_some_and(|key| key == candidate),
	}
}

/// Parse the spellings accepted for boolean filters and form toggles.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"yes" | "y" | "true" | "1" | "on" => Some(true),
		"no" | "n" | "false" | "0" | "off" => Some(false),
		_ => None,
	}
}

/// Retain the records matching every active filter, in their original order.
#[must_use]
pub fn apply_filters<'a, R: Record>(records: &'a [R], filters: &FilterSet) -> Vec<&'a R> {
	if filters.is_identity() {
		return records.iter().collect();
	}
	records
		.iter()
		.filter(|record| filters.matches(*record))
		.collect()
}
