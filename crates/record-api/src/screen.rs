//! Type-erased screens and the registry the console is built from.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::action::{ActionContext, ActionOutcome, RowAction, ShareRequest, dispatch};
use crate::collection::Collection;
use crate::error::{RecordError, RegistryError};
use crate::form::{FormSession, SubmitOutcome, ValidationStyle};
use crate::types::{Record, RecordId, Schema};
use crate::view::{ProjectedPage, ViewState, arrange, project};

/// UI strings for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenUiDefinition {
	/// Label rendered in the tab bar.
	pub tab_label: &'static str,
	/// Title shown above the table.
	pub title: &'static str,
	/// Placeholder shown in the search prompt.
	pub hint: &'static str,
	/// Label used for the record count in summaries.
	pub count_label: &'static str,
	/// Singular record noun for form titles, e.g. `client`.
	pub noun: &'static str,
}

/// Static metadata describing a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
	/// Stable identifier used by the CLI and configuration.
	pub id: &'static str,
	/// Console the screen belongs to, e.g. `fieldsense`.
	pub group: &'static str,
	pub ui: ScreenUiDefinition,
}

/// What the caller should present after a row action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
	OpenForm(FormSession),
	Deleted { id: RecordId, label: String },
	Share(ShareRequest),
}

/// A table of records the console can show, independent of the record type.
pub trait Screen: Send {
	fn descriptor(&self) -> &ScreenDescriptor;

	fn schema(&self) -> &'static Schema;

	fn form_style(&self) -> ValidationStyle;

	/// Number of records before filtering.
	fn total_count(&self) -> usize;

	/// Number of records left after filtering.
	fn filtered_count(&self, state: &ViewState) -> usize;

	/// Filter, sort and paginate the records for display.
	fn project(&self, state: &ViewState) -> ProjectedPage;

	/// Blank form for adding a record.
	fn new_form(&self) -> FormSession;

	fn dispatch(&mut self, action: RowAction, id: RecordId) -> Result<ScreenAction, RecordError>;

	fn submit(
		&mut self,
		form: &mut FormSession,
		now: NaiveDateTime,
	) -> Result<SubmitOutcome, RecordError>;

	fn record_label(&self, id: RecordId) -> Option<String>;
}

/// [`Screen`] backed by a typed [`Collection`].
#[derive(Debug, Clone)]
pub struct RecordScreen<R> {
	descriptor: ScreenDescriptor,
	collection: Collection<R>,
	style: ValidationStyle,
	recipients: &'static [&'static str],
}

impl<R: Record> RecordScreen<R> {
	#[must_use]
	pub fn new(descriptor: ScreenDescriptor, collection: Collection<R>) -> Self {
		Self {
			descriptor,
			collection,
			style: ValidationStyle::Inline,
			recipients: &[],
		}
	}

	#[must_use]
	pub fn with_style(mut self, style: ValidationStyle) -> Self {
		self.style = style;
		self
	}

	/// People offered by the share picker.
	#[must_use]
	pub fn with_recipients(mut self, recipients: &'static [&'static str]) -> Self {
		self.recipients = recipients;
		self
	}

	#[must_use]
	pub fn collection(&self) -> &Collection<R> {
		&self.collection
	}
}

impl<R: Record> Screen for RecordScreen<R> {
	fn descriptor(&self) -> &ScreenDescriptor {
		&self.descriptor
	}

	fn schema(&self) -> &'static Schema {
		R::schema()
	}

	fn form_style(&self) -> ValidationStyle {
		self.style
	}

	fn total_count(&self) -> usize {
		self.collection.len()
	}

	fn filtered_count(&self, state: &ViewState) -> usize {
		arrange(&self.collection, state).len()
	}

	fn project(&self, state: &ViewState) -> ProjectedPage {
		project(&self.collection, state).into()
	}

	fn new_form(&self) -> FormSession {
		FormSession::create(R::schema(), self.style)
	}

	fn dispatch(&mut self, action: RowAction, id: RecordId) -> Result<ScreenAction, RecordError> {
		debug!(screen = self.descriptor.id, action = action.label(), %id, "row action");
		let context = ActionContext {
			style: self.style,
			recipients: self.recipients,
		};
		Ok(match dispatch(action, id, &mut self.collection, context)? {
			ActionOutcome::OpenForm(form) => ScreenAction::OpenForm(form),
			ActionOutcome::Deleted(record) => ScreenAction::Deleted {
				id,
				label: record.label(),
			},
			ActionOutcome::Share(request) => ScreenAction::Share(request),
		})
	}

	fn submit(
		&mut self,
		form: &mut FormSession,
		now: NaiveDateTime,
	) -> Result<SubmitOutcome, RecordError> {
		form.submit(&mut self.collection, now)
	}

	fn record_label(&self, id: RecordId) -> Option<String> {
		self.collection.get(id).map(Record::label)
	}
}

/// Registered screens in tab order.
#[derive(Default)]
pub struct ScreenRegistry {
	screens: Vec<Box<dyn Screen>>,
}

impl std::fmt::Debug for ScreenRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list()
			.entries(self.screens.iter().map(|screen| screen.descriptor().id))
			.finish()
	}
}

impl ScreenRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a screen. Identifiers must be unique across the registry.
	pub fn register(&mut self, screen: Box<dyn Screen>) -> Result<(), RegistryError> {
		let id = screen.descriptor().id;
		if self.position(id).is_some() {
			return Err(RegistryError::DuplicateId { id });
		}
		self.screens.push(screen);
		Ok(())
	}

	pub fn register_all<I>(&mut self, screens: I) -> Result<(), RegistryError>
	where
		I: IntoIterator<Item = Box<dyn Screen>>,
	{
		for screen in screens {
			self.register(screen)?;
		}
		Ok(())
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&dyn Screen> {
		self.position(id).map(|index| &*self.screens[index])
	}

	pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Screen + 'static)> {
		let index = self.position(id)?;
		Some(&mut *self.screens[index])
	}

	#[must_use]
	pub fn position(&self, id: &str) -> Option<usize> {
		self.screens
			.iter()
			.position(|screen| screen.descriptor().id == id)
	}

	#[must_use]
	pub fn at(&self, index: usize) -> Option<&dyn Screen> {
		self.screens.get(index).map(|screen| &**screen)
	}

	pub fn at_mut(&mut self, index: usize) -> Option<&mut (dyn Screen + 'static)> {
		self.screens.get_mut(index).map(|screen| &mut **screen)
	}

	pub fn iter(&self) -> impl Iterator<Item = &dyn Screen> {
		self.screens.iter().map(|screen| &**screen)
	}

	pub fn descriptors(&self) -> impl Iterator<Item = &ScreenDescriptor> {
		self.screens.iter().map(|screen| screen.descriptor())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.screens.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.screens.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collection::tests::{NOTE_SCHEMA, Note, notes, stamp};

	const NOTES: ScreenDescriptor = ScreenDescriptor {
		id: "notes",
		group: "test",
		ui: ScreenUiDefinition {
			tab_label: "Notes",
			title: "Notes",
			hint: "Search notes",
			count_label: "Notes",
			noun: "note",
		},
	};

	fn screen() -> RecordScreen<Note> {
		RecordScreen::new(NOTES, notes()).with_recipients(&["Ana"])
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let mut registry = ScreenRegistry::new();
		registry.register(Box::new(screen())).unwrap();
		assert_eq!(
			registry.register(Box::new(screen())),
			Err(RegistryError::DuplicateId { id: "notes" })
		);
		assert_eq!(registry.len(), 1);
		assert!(registry.get("notes").is_some());
		assert!(registry.get("missing").is_none());
	}

	#[test]
	fn screens_project_and_mutate_through_the_trait() {
		let mut registry = ScreenRegistry::new();
		registry.register(Box::new(screen())).unwrap();
		let screen = registry.get_mut("notes").unwrap();

		let mut state = ViewState::default();
		state.filters.set(&NOTE_SCHEMA, "topic", "Work").unwrap();
		assert_eq!(screen.filtered_count(&state), 2);
		assert_eq!(screen.project(&state).rows.len(), 2);

		let deleted = screen.dispatch(RowAction::Delete, RecordId(1)).unwrap();
		assert_eq!(
			deleted,
			ScreenAction::Deleted {
				id: RecordId(1),
				label: "Quarterly report".to_string()
			}
		);
		assert_eq!(screen.total_count(), 2);

		let mut form = screen.new_form();
		form.set_input("title", "Plan trip");
		form.set_input("topic", "Home");
		let outcome = screen.submit(&mut form, stamp(5)).unwrap();
		assert_eq!(outcome, SubmitOutcome::Created(RecordId(4)));
		assert_eq!(screen.record_label(RecordId(4)).as_deref(), Some("Plan trip"));
	}

	#[test]
	fn share_uses_the_configured_recipients() {
		let mut screen = screen();
		let ScreenAction::Share(request) = screen.dispatch(RowAction::Share, RecordId(2)).unwrap()
		else {
			panic!("expected share");
		};
		assert_eq!(request.recipients, vec!["Ana".to_string()]);
		assert_eq!(request.label, "Buy paint");
	}
}
