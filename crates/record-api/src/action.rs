//! Per-row actions: view, edit, delete and share.

use tracing::info;

use crate::collection::Collection;
use crate::error::RecordError;
use crate::form::{FormSession, ValidationStyle};
use crate::notification::Notification;
use crate::types::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
	View,
	Edit,
	Delete,
	Share,
}

impl RowAction {
	pub const ALL: [Self; 4] = [Self::View, Self::Edit, Self::Delete, Self::Share];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::View => "View",
			Self::Edit => "Edit",
			Self::Delete => "Delete",
			Self::Share => "Share",
		}
	}
}

/// Recipient picker opened by the share action.
///
/// Confirming only produces a notification; the record is not touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
	pub id: RecordId,
	pub label: String,
	pub recipients: Vec<String>,
	pub selected: usize,
}

impl ShareRequest {
	#[must_use]
	pub fn new(id: RecordId, label: impl Into<String>, recipients: &[&str]) -> Self {
		Self {
			id,
			label: label.into(),
			recipients: recipients.iter().map(|name| (*name).to_string()).collect(),
			selected: 0,
		}
	}

	pub fn select_next(&mut self) {
		if !self.recipients.is_empty() {
			self.selected = (self.selected + 1) % self.recipients.len();
		}
	}

	pub fn select_previous(&mut self) {
		if !self.recipients.is_empty() {
			self.selected = (self.selected + self.recipients.len() - 1) % self.recipients.len();
		}
	}

	#[must_use]
	pub fn recipient(&self) -> Option<&str> {
		self.recipients.get(self.selected).map(String::as_str)
	}

	/// Acknowledge the share. Returns `None` when there is nobody to share with.
	#[must_use]
	pub fn confirm(&self) -> Option<Notification> {
		let recipient = self.recipient()?;
		info!(id = %self.id, recipient, "record shared");
		Some(Notification::info(format!(
			"Shared \"{}\" with {recipient}",
			self.label
		)))
	}
}

/// Settings a screen passes along with each action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionContext<'a> {
	pub style: ValidationStyle,
	pub recipients: &'a [&'a str],
}

/// What the caller should do after an action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<R> {
	/// Open a populated form in view or edit mode.
	OpenForm(FormSession),
	/// The record was removed.
	Deleted(R),
	/// Show the recipient picker.
	Share(ShareRequest),
}

/// Run a row action against the record with `id`.
///
/// Deletion happens immediately with no confirmation step.
pub fn dispatch<R: Record>(
	action: RowAction,
	id: RecordId,
	collection: &mut Collection<R>,
	context: ActionContext<'_>,
) -> Result<ActionOutcome<R>, RecordError> {
	match action {
		RowAction::View | RowAction::Edit => {
			let record = collection.get(id).ok_or(RecordError::NotFound { id })?;
			let form = if action == RowAction::View {
				FormSession::view(record, context.style)
			} else {
				FormSession::edit(record, context.style)
			};
			Ok(ActionOutcome::OpenForm(form))
		}
		RowAction::Delete => collection.remove(id).map(ActionOutcome::Deleted),
		RowAction::Share => {
			let record = collection.get(id).ok_or(RecordError::NotFound { id })?;
			Ok(ActionOutcome::Share(ShareRequest::new(
				id,
				record.label(),
				context.recipients,
			)))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collection::tests::notes;
	use crate::form::FormMode;
	use crate::notification::NotificationKind;

	#[test]
	fn view_and_edit_open_populated_forms() {
		let mut collection = notes();
		let outcome = dispatch(
			RowAction::View,
			RecordId(1),
			&mut collection,
			ActionContext::default(),
		)
		.unwrap();
		let ActionOutcome::OpenForm(form) = outcome else {
			panic!("expected a form");
		};
		assert_eq!(form.mode, FormMode::View(RecordId(1)));
		assert_eq!(form.draft.get("title"), Some("Quarterly report"));

		let outcome = dispatch(
			RowAction::Edit,
			RecordId(2),
			&mut collection,
			ActionContext::default(),
		)
		.unwrap();
		assert!(matches!(
			outcome,
			ActionOutcome::OpenForm(FormSession {
				mode: FormMode::Edit(RecordId(2)),
				..
			})
		));
	}

	#[test]
	fn delete_is_immediate() {
		let mut collection = notes();
		let outcome = dispatch(
			RowAction::Delete,
			RecordId(2),
			&mut collection,
			ActionContext::default(),
		)
		.unwrap();
		assert!(matches!(outcome, ActionOutcome::Deleted(ref note) if note.title == "Buy paint"));
		assert_eq!(collection.len(), 2);
		assert!(!collection.contains(RecordId(2)));
	}

	#[test]
	fn share_leaves_the_record_alone() {
		let mut collection = notes();
		let context = ActionContext {
			recipients: &["Priya", "Marco"],
			..ActionContext::default()
		};
		let outcome = dispatch(RowAction::Share, RecordId(3), &mut collection, context).unwrap();
		let ActionOutcome::Share(mut request) = outcome else {
			panic!("expected a share request");
		};
		request.select_previous();
		assert_eq!(request.recipient(), Some("Marco"));
		let notification = request.confirm().unwrap();
		assert_eq!(notification.kind, NotificationKind::Info);
		assert_eq!(notification.message, "Shared \"Team offsite\" with Marco");
		assert_eq!(collection.len(), 3);
	}

	#[test]
	fn share_without_recipients_confirms_nothing() {
		let request = ShareRequest::new(RecordId(1), "x", &[]);
		assert!(request.confirm().is_none());
	}

	#[test]
	fn stale_ids_fail() {
		let mut collection = notes();
		for action in RowAction::ALL {
			let result = dispatch(action, RecordId(42), &mut collection, ActionContext::default());
			assert_eq!(result.err(), Some(RecordError::NotFound { id: RecordId(42) }));
		}
	}
}
