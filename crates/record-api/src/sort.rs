//! Sort criteria applied after filtering.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::ViewError;
use crate::types::{Record, Schema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	#[must_use]
	pub const fn arrow(self) -> &'static str {
		match self {
			Self::Ascending => "↑",
			Self::Descending => "↓",
		}
	}

	fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// One column of an explicit sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
	pub field: &'static str,
	pub direction: SortDirection,
}

/// Set of enabled "recent by X" flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentFlags {
	enabled: Vec<&'static str>,
}

impl RecentFlags {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable or disable a flag declared by the schema.
	pub fn set(&mut self, schema: &Schema, name: &str, enabled: bool) -> Result<(), ViewError> {
		let key = schema
			.recent(name)
			.ok_or_else(|| ViewError::UnknownRecentFlag {
				name: name.to_string(),
			})?;
		self.enabled.retain(|flag| *flag != key.name);
		if enabled {
			self.enabled.push(key.name);
		}
		Ok(())
	}

	#[must_use]
	pub fn is_set(&self, name: &str) -> bool {
		self.enabled.iter().any(|flag| *flag == name)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.enabled.is_empty()
	}

	/// Timestamp field selected by the highest-priority enabled flag.
	///
	/// Priority follows the order the schema declares its recent keys in.
	#[must_use]
	pub fn active_field(&self, schema: &Schema) -> Option<&'static str> {
		schema
			.recent
			.iter()
			.find(|key| self.is_set(key.name))
			.map(|key| key.field)
	}
}

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortSpec {
	/// Keep the filtered order.
	#[default]
	Unsorted,
	/// Compare field by field until one differs.
	ByFields(Vec<SortKey>),
	/// Newest first by the timestamp behind the winning recent flag.
	Recent(RecentFlags),
}

impl SortSpec {
	/// Sort by a single field.
	pub fn by_field(
		schema: &Schema,
		field: &str,
		direction: SortDirection,
	) -> Result<Self, ViewError> {
		let def = schema.field(field).ok_or_else(|| ViewError::UnknownField {
			field: field.to_string(),
		})?;
		Ok(Self::ByFields(vec![SortKey {
			field: def.name,
			direction,
		}]))
	}

	/// Sort by the named recent flag.
	pub fn recent(schema: &Schema, name: &str) -> Result<Self, ViewError> {
		let mut flags = RecentFlags::new();
		flags.set(schema, name, true)?;
		Ok(Self::Recent(flags))
	}

	/// Parse `field`, `field:asc`, `field:desc`, comma-separated lists of those,
	/// or `recent:<name>`.
	pub fn parse(schema: &Schema, text: &str) -> Result<Self, ViewError> {
		let text = text.trim();
		if text.is_empty() {
			return Ok(Self::Unsorted);
		}
		if let Some(name) = text.strip_prefix("recent:") {
			return Self::recent(schema, name.trim());
		}

		let mut keys = Vec::new();
		for part in text.split(',').map(str::trim).filter(|part| !part.is_empty()) {
			let (field, direction) = match part.split_once(':') {
				Some((field, direction)) => (field.trim(), parse_direction(field, direction)?),
				None => (part, SortDirection::Ascending),
			};
			let def = schema.field(field).ok_or_else(|| ViewError::UnknownField {
				field: field.to_string(),
			})?;
			keys.push(SortKey {
				field: def.name,
				direction,
			});
		}
		Ok(if keys.is_empty() {
			Self::Unsorted
		} else {
			Self::ByFields(keys)
		})
	}

	#[must_use]
	pub fn is_unsorted(&self) -> bool {
		match self {
			Self::Unsorted => true,
			Self::ByFields(keys) => keys.is_empty(),
			Self::Recent(flags) => flags.is_empty(),
		}
	}

	/// Short description for status lines, using field labels.
	#[must_use]
	pub fn describe(&self, schema: &Schema) -> String {
		match self {
			Self::Unsorted => "insertion order".to_string(),
			Self::ByFields(keys) => keys
				.iter()
				.map(|key| {
					let label = schema.field(key.field).map_or(key.field, |def| def.label);
					format!("{label} {}", key.direction.arrow())
				})
				.collect::<Vec<_>>()
				.join(", "),
			Self::Recent(flags) => schema
				.recent
				.iter()
				.find(|key| flags.is_set(key.name))
				.map_or_else(|| "insertion order".to_string(), |key| key.label.to_string()),
		}
	}
}

fn parse_direction(field: &str, raw: &str) -> Result<SortDirection, ViewError> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"asc" | "ascending" => Ok(SortDirection::Ascending),
		"desc" | "descending" => Ok(SortDirection::Descending),
		other => Err(ViewError::InvalidDirection {
			field: field.trim().to_string(),
			direction: other.to_string(),
		}),
	}
}

/// Order the filtered records.
///
/// The sort is stable, so records that compare equal keep their filtered order.
#[must_use]
pub fn apply_sort<'a, R: Record>(mut records: Vec<&'a R>, spec: &SortSpec) -> Vec<&'a R> {
	match spec {
		SortSpec::Unsorted => {}
		SortSpec::ByFields(keys) => {
			if !keys.is_empty() {
				records.sort_by(|a, b| compare_keys(*a, *b, keys));
			}
		}
		SortSpec::Recent(flags) => {
			if let Some(field) = flags.active_field(R::schema()) {
				records.sort_by(|a, b| compare_field(*a, *b, field).reverse());
			}
		}
	}
	records
}

fn compare_keys<R: Record>(a: &R, b: &R, keys: &[SortKey]) -> Ordering {
	keys.iter()
		.map(|key| key.direction.apply(compare_field(a, b, key.field)))
		.find(|ordering| ordering.is_ne())
		.unwrap_or(Ordering::Equal)
}

/// Choices order by their declared option position; everything else uses
/// [`FieldValue::compare`](crate::FieldValue::compare).
fn compare_field<R: Record>(a: &R, b: &R, field: &str) -> Ordering {
	let options = R::schema()
		.field(field)
		.and_then(|def| def.kind.options());
	match (a.field(field), b.field(field)) {
		(Some(a), Some(b)) => match options {
			Some(options) => option_rank(options, &a.display())
				.cmp(&option_rank(options, &b.display()))
				.then_with(|| a.compare(&b)),
			None => a.compare(&b),
		},
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

/// Unknown labels rank after every declared option.
fn option_rank(options: &[&str], label: &str) -> usize {
	options
		.iter()
		.position(|option| option.eq_ignore_ascii_case(label))
		.unwrap_or(options.len())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collection::tests::{NOTE_SCHEMA, Note, note, notes};

	fn ids(records: &[&Note]) -> Vec<u64> {
		records.iter().map(|record| record.id.get()).collect()
	}

	#[test]
	fn unsorted_keeps_filtered_order() {
		let collection = notes();
		let sorted = apply_sort(collection.iter().collect(), &SortSpec::Unsorted);
		assert_eq!(ids(&sorted), vec![1, 2, 3]);
	}

	#[test]
	fn recent_added_sorts_newest_first() {
		let collection = notes();
		let spec = SortSpec::recent(&NOTE_SCHEMA, "added").unwrap();
		let sorted = apply_sort(collection.iter().collect(), &spec);
		assert_eq!(ids(&sorted), vec![1, 3, 2]);
		let stamps: Vec<_> = sorted.iter().map(|n| n.added_on).collect();
		assert!(stamps.windows(2).all(|pair| pair[0] > pair[1]));
	}

	#[test]
	fn explicit_keys_compare_lexicographically() {
		let records = vec![
			note(1, "b", "Work", 1),
			note(2, "a", "Home", 2),
			note(3, "c", "Home", 3),
		];
		let spec = SortSpec::parse(&NOTE_SCHEMA, "topic:desc, title").unwrap();
		let sorted = apply_sort(records.iter().collect(), &spec);
		assert_eq!(ids(&sorted), vec![2, 3, 1]);

		let spec = SortSpec::parse(&NOTE_SCHEMA, "title:desc").unwrap();
		let sorted = apply_sort(records.iter().collect(), &spec);
		assert_eq!(ids(&sorted), vec![3, 1, 2]);
	}

	#[test]
	fn choices_sort_in_declared_order() {
		let records = vec![note(1, "a", "Home", 1), note(2, "b", "Work", 2)];
		let spec = SortSpec::parse(&NOTE_SCHEMA, "topic").unwrap();
		let sorted = apply_sort(records.iter().collect(), &spec);
		assert_eq!(ids(&sorted), vec![2, 1]);
	}

	#[test]
	fn parse_reports_bad_input() {
		assert_eq!(
			SortSpec::parse(&NOTE_SCHEMA, "title:up"),
			Err(ViewError::InvalidDirection {
				field: "title".to_string(),
				direction: "up".to_string(),
			})
		);
		assert_eq!(
			SortSpec::parse(&NOTE_SCHEMA, "recent:modified"),
			Err(ViewError::UnknownRecentFlag {
				name: "modified".to_string()
			})
		);
		assert_eq!(
			SortSpec::parse(&NOTE_SCHEMA, "size"),
			Err(ViewError::UnknownField {
				field: "size".to_string()
			})
		);
		assert_eq!(SortSpec::parse(&NOTE_SCHEMA, "  "), Ok(SortSpec::Unsorted));
	}

	#[test]
	fn recent_flags_toggle() {
		let mut flags = RecentFlags::new();
		flags.set(&NOTE_SCHEMA, "added", true).unwrap();
		assert_eq!(flags.active_field(&NOTE_SCHEMA), Some("added_on"));
		flags.set(&NOTE_SCHEMA, "added", false).unwrap();
		assert!(flags.is_empty());
		assert_eq!(flags.active_field(&NOTE_SCHEMA), None);
	}

	#[test]
	fn describe_uses_labels() {
		let spec = SortSpec::by_field(&NOTE_SCHEMA, "title", SortDirection::Descending).unwrap();
		assert_eq!(spec.describe(&NOTE_SCHEMA), "Title ↓");
		let spec = SortSpec::recent(&NOTE_SCHEMA, "added").unwrap();
		assert_eq!(spec.describe(&NOTE_SCHEMA), "Recently added");
	}

	#[test]
	fn sorting_never_drops_records() {
		let collection = notes();
		let spec = SortSpec::parse(&NOTE_SCHEMA, "topic").unwrap();
		let sorted = apply_sort(collection.iter().collect(), &spec);
		assert_eq!(sorted.len(), collection.len());
	}
}
