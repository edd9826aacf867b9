//! Owned, ordered storage for the records of one screen.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::RecordError;
use crate::types::{BuildContext, FieldValues, Record, RecordId};

/// In-memory ordered set of records backing one screen.
///
/// Insertion order is the display order when no sort is active. Identifiers
/// come from a monotonic counter so a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<R> {
	records: Vec<R>,
	next_id: u64,
}

impl<R> Default for Collection<R> {
	fn default() -> Self {
		Self {
			records: Vec::new(),
			next_id: 1,
		}
	}
}

impl<R: Record> Collection<R> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the collection from literal data.
	///
	/// The id allocator starts after the largest seeded id.
	#[must_use]
	pub fn seeded(records: Vec<R>) -> Self {
		let next_id = records
			.iter()
			.map(|record| record.id().get())
			.max()
			.map_or(1, |max| max + 1);
		Self { records, next_id }
	}

	/// Append a new record built from validated values and return its id.
	pub fn create(&mut self, values: &FieldValues, now: NaiveDateTime) -> RecordId {
		let id = RecordId(self.next_id);
		self.next_id += 1;
		let record = R::build(id, values, BuildContext { now, previous: None });
		self.records.push(record);
		debug!(%id, total = self.records.len(), "record created");
		id
	}

	/// Replace the fields of an existing record, keeping its id and position.
	pub fn update(
		&mut self,
		id: RecordId,
		values: &FieldValues,
		now: NaiveDateTime,
	) -> Result<(), RecordError> {
		let index = self.index_of(id).ok_or(RecordError::NotFound { id })?;
		let previous = &self.records[index];
		let replacement = R::build(
			id,
			values,
			BuildContext {
				now,
				previous: Some(previous),
			},
		);
		self.records[index] = replacement;
		debug!(%id, "record updated");
		Ok(())
	}

	/// Remove a record by id. There is no undo.
	pub fn remove(&mut self, id: RecordId) -> Result<R, RecordError> {
		let index = self.index_of(id).ok_or(RecordError::NotFound { id })?;
		let removed = self.records.remove(index);
		debug!(%id, remaining = self.records.len(), "record deleted");
		Ok(removed)
	}

	#[must_use]
	pub fn get(&self, id: RecordId) -> Option<&R> {
		self.records.iter().find(|record| record.id() == id)
	}

	#[must_use]
	pub fn contains(&self, id: RecordId) -> bool {
		self.index_of(id).is_some()
	}

	fn index_of(&self, id: RecordId) -> Option<usize> {
		self.records.iter().position(|record| record.id() == id)
	}
}

impl<R> Collection<R> {
	pub fn iter(&self) -> std::slice::Iter<'_, R> {
		self.records.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[R] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a, R> IntoIterator for &'a Collection<R> {
	type Item = &'a R;
	type IntoIter = std::slice::Iter<'a, R>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}
