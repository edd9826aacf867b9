//! Create, edit and view forms with required-field validation.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::error::RecordError;
use crate::filter::parse_flag;
use crate::types::{
	DATE_FORMAT, FieldDef, FieldKind, FieldValue, FieldValues, FileRef, Record, RecordId, Schema,
	TIMESTAMP_FORMAT, flag_label,
};

/// What a form is doing with its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
	Create,
	Edit(RecordId),
	/// Read-only: inputs are disabled and there is no submit control.
	View(RecordId),
}

impl FormMode {
	#[must_use]
	pub const fn inputs_enabled(self) -> bool {
		!matches!(self, Self::View(_))
	}

	#[must_use]
	pub const fn shows_submit(self) -> bool {
		self.inputs_enabled()
	}

	#[must_use]
	pub const fn record_id(self) -> Option<RecordId> {
		match self {
			Self::Create => None,
			Self::Edit(id) | Self::View(id) => Some(id),
		}
	}

	#[must_use]
	pub const fn title_prefix(self) -> &'static str {
		match self {
			Self::Create => "New",
			Self::Edit(_) => "Edit",
			Self::View(_) => "View",
		}
	}

	/// Modal title such as `Edit client`.
	#[must_use]
	pub fn title(self, noun: &str) -> String {
		format!("{} {noun}", self.title_prefix())
	}
}

/// How a form reports rejected submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationStyle {
	/// Messages appear beside the offending fields.
	#[default]
	Inline,
	/// Submission is refused without any message.
	Silent,
}

/// Raw text typed into each editable field.
///
/// Choices hold their option label and flags hold `Yes` or `No`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
	inputs: IndexMap<&'static str, String>,
}

impl FormDraft {
	/// Blank draft for a create form.
	#[must_use]
	pub fn empty(schema: &Schema) -> Self {
		let inputs = schema
			.editable_fields()
			.map(|def| {
				let initial = match def.kind {
					FieldKind::Flag => flag_label(false).to_string(),
					_ => String::new(),
				};
				(def.name, initial)
			})
			.collect();
		Self { inputs }
	}

	/// Draft populated with the record's current values.
	#[must_use]
	pub fn from_record<R: Record>(record: &R) -> Self {
		let inputs = R::schema()
			.editable_fields()
			.map(|def| {
				let current = record
					.field(def.name)
					.map(|value| value.display())
					.unwrap_or_default();
				(def.name, current)
			})
			.collect();
		Self { inputs }
	}

	/// Replace the input of a field. Returns `false` for fields not on the form.
	pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
		match self.inputs.get_mut(field) {
			Some(slot) => {
				*slot = value.into();
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn get(&self, field: &str) -> Option<&str> {
		self.inputs.get(field).map(String::as_str)
	}

	/// Field names in form order.
	pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.inputs.keys().copied()
	}

	/// Step a choice to its next or previous option, or flip a flag.
	///
	/// Returns `false` when the field is neither.
	pub fn cycle_choice(&mut self, def: &FieldDef, forward: bool) -> bool {
		let Some(slot) = self.inputs.get_mut(def.name) else {
			return false;
		};
		match def.kind {
			FieldKind::Choice(options) if !options.is_empty() => {
				let current = options.iter().position(|option| *option == slot.as_str());
				let next = match (current, forward) {
					(None, true) => 0,
					(None, false) => options.len() - 1,
					(Some(index), true) => (index + 1) % options.len(),
					(Some(index), false) => (index + options.len() - 1) % options.len(),
				};
				*slot = options[next].to_string();
				true
			}
			FieldKind::Flag => {
				let current = parse_flag(slot).unwrap_or(false);
				*slot = flag_label(!current).to_string();
				true
			}
			_ => false,
		}
	}
}

/// Field name to message, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
	messages: IndexMap<&'static str, String>,
}

impl ValidationErrors {
	pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
		self.messages.insert(field, message.into());
	}

	#[must_use]
	pub fn get(&self, field: &str) -> Option<&str> {
		self.messages.get(field).map(String::as_str)
	}

	pub fn remove(&mut self, field: &str) {
		self.messages.shift_remove(field);
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.messages
			.iter()
			.map(|(field, message)| (*field, message.as_str()))
	}
}

/// Check a draft and convert it into typed values.
///
/// Required fields must be non-empty. Non-empty input must also parse for its
/// kind: whole numbers, `YYYY-MM-DD` dates, and one of the declared options
/// for choices. Optional fields left empty become empty values.
pub fn validate(schema: &Schema, draft: &FormDraft) -> Result<FieldValues, ValidationErrors> {
	let mut values = FieldValues::new();
	let mut errors = ValidationErrors::default();

	for def in schema.editable_fields() {
		let raw = draft.get(def.name).unwrap_or_default().trim();
		if raw.is_empty() {
			if def.required {
				errors.insert(def.name, format!("{} is required", def.label));
			} else if let Some(value) = empty_value(def.kind) {
				values.insert(def.name, value);
			}
			continue;
		}
		match parse_input(def, raw) {
			Ok(value) => values.insert(def.name, value),
			Err(message) => errors.insert(def.name, message),
		}
	}

	if errors.is_empty() {
		Ok(values)
	} else {
		Err(errors)
	}
}

fn empty_value(kind: FieldKind) -> Option<FieldValue> {
	match kind {
		FieldKind::Text => Some(FieldValue::Text(String::new())),
		FieldKind::Number => Some(FieldValue::Number(0)),
		FieldKind::Flag => Some(FieldValue::Flag(false)),
		FieldKind::Choice(_) => Some(FieldValue::Choice(String::new())),
		FieldKind::Date => Some(FieldValue::Date(None)),
		FieldKind::File => Some(FieldValue::File(None)),
		FieldKind::Timestamp => None,
	}
}

fn parse_input(def: &FieldDef, raw: &str) -> Result<FieldValue, String> {
	match def.kind {
		FieldKind::Text => Ok(FieldValue::text(raw)),
		FieldKind::Number => raw
			.parse::<i64>()
			.map(FieldValue::Number)
			.map_err(|_| format!("{} must be a whole number", def.label)),
		FieldKind::Flag => parse_flag(raw)
			.map(FieldValue::Flag)
			.ok_or_else(|| format!("{} must be Yes or No", def.label)),
		FieldKind::Choice(options) => options
			.iter()
			.find(|option| option.eq_ignore_ascii_case(raw))
			.map(|option| FieldValue::choice(*option))
			.ok_or_else(|| format!("Choose one of: {}", options.join(", "))),
		FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
			.map(|date| FieldValue::Date(Some(date)))
			.map_err(|_| "Use the YYYY-MM-DD format".to_string()),
		FieldKind::Timestamp => NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
			.map(FieldValue::Timestamp)
			.map_err(|_| "Use the YYYY-MM-DD HH:MM format".to_string()),
		FieldKind::File => Ok(FieldValue::File(Some(FileRef::new(raw)))),
	}
}

/// Result of pressing submit on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Created(RecordId),
	Updated(RecordId),
	/// Validation failed; the collection is unchanged.
	Rejected(ValidationErrors),
	/// View forms have nothing to submit.
	ReadOnly,
}

/// An open form: its mode, the draft being edited and the last rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
	pub mode: FormMode,
	pub draft: FormDraft,
	pub errors: ValidationErrors,
	pub style: ValidationStyle,
}

impl FormSession {
	#[must_use]
	pub fn create(schema: &Schema, style: ValidationStyle) -> Self {
		Self {
			mode: FormMode::Create,
			draft: FormDraft::empty(schema),
			errors: ValidationErrors::default(),
			style,
		}
	}

	#[must_use]
	pub fn edit<R: Record>(record: &R, style: ValidationStyle) -> Self {
		Self {
			mode: FormMode::Edit(record.id()),
			draft: FormDraft::from_record(record),
			errors: ValidationErrors::default(),
			style,
		}
	}

	#[must_use]
	pub fn view<R: Record>(record: &R, style: ValidationStyle) -> Self {
		Self {
			mode: FormMode::View(record.id()),
			draft: FormDraft::from_record(record),
			errors: ValidationErrors::default(),
			style,
		}
	}

	/// Errors to show beside the fields, if the form shows any.
	#[must_use]
	pub fn visible_errors(&self) -> Option<&ValidationErrors> {
		match self.style {
			ValidationStyle::Inline if !self.errors.is_empty() => Some(&self.errors),
			_ => None,
		}
	}

	/// Type into a field. Ignored in view mode and for unknown fields.
	pub fn set_input(&mut self, field: &str, value: impl Into<String>) -> bool {
		if !self.mode.inputs_enabled() {
			return false;
		}
		let changed = self.draft.set(field, value);
		if changed {
			self.errors.remove(field);
		}
		changed
	}

	/// Validate the draft and apply it to the collection.
	///
	/// A rejected submission records its errors on the session and leaves the
	/// collection untouched.
	pub fn submit<R: Record>(
		&mut self,
		collection: &mut Collection<R>,
		now: NaiveDateTime,
	) -> Result<SubmitOutcome, RecordError> {
		if !self.mode.shows_submit() {
			return Ok(SubmitOutcome::ReadOnly);
		}
		let values = match validate(R::schema(), &self.draft) {
			Ok(values) => values,
			Err(errors) => {
				debug!(fields = errors.len(), "form submission rejected");
				self.errors = errors.clone();
				return Ok(SubmitOutcome::Rejected(errors));
			}
		};
		self.errors = ValidationErrors::default();
		match self.mode {
			FormMode::Create => {
				let id = collection.create(&values, now);
				info!(%id, "record added from form");
				Ok(SubmitOutcome::Created(id))
			}
			FormMode::Edit(id) => {
				collection.update(id, &values, now)?;
				info!(%id, "record updated from form");
				Ok(SubmitOutcome::Updated(id))
			}
			FormMode::View(_) => Ok(SubmitOutcome::ReadOnly),
		}
	}
}
