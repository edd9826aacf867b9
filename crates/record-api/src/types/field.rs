/// Shape of a single record field.
///
/// The kind decides how filters match the field, how form input is parsed and
/// how the value is rendered in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Free text, matched as a case-insensitive substring.
	Text,
	/// Whole number, matched as a substring of its decimal form.
	Number,
	/// Boolean toggle, matched by exact equality.
	Flag,
	/// One of a fixed set of options, rendered as a dropdown.
	Choice(&'static [&'static str]),
	/// Nullable calendar date.
	Date,
	/// Date and time, usually stamped by the record itself.
	Timestamp,
	/// Nullable reference to an attached file.
	File,
}

impl FieldKind {
	/// Returns `true` when filters on this field use substring matching.
	#[must_use]
	pub const fn is_substring_matched(self) -> bool {
		matches!(self, Self::Text | Self::Number | Self::File)
	}

	/// Returns the options of a choice field.
	#[must_use]
	pub const fn options(self) -> Option<&'static [&'static str]> {
		match self {
			Self::Choice(options) => Some(options),
			_ => None,
		}
	}
}

/// Static description of a field as shown in tables and forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
	/// Stable identifier used by filters, sort keys and form drafts.
	pub name: &'static str,
	/// Column header and form label.
	pub label: &'static str,
	pub kind: FieldKind,
	/// Whether the form refuses to submit while this field is empty.
	pub required: bool,
	/// Whether the field appears in create/edit forms.
	pub editable: bool,
	/// Relative column weight for table layouts.
	pub width: u16,
}

impl FieldDef {
	#[must_use]
	pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			label,
			kind,
			required: false,
			editable: true,
			width: 1,
		}
	}

	#[must_use]
	pub const fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Exclude the field from forms; the record fills it on its own.
	#[must_use]
	pub const fn read_only(mut self) -> Self {
		self.editable = false;
		self
	}

	#[must_use]
	pub const fn width(mut self, width: u16) -> Self {
		self.width = width;
		self
	}
}

/// A named "recent by X" ordering keyed to a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentKey {
	/// Flag identifier, e.g. `added`.
	pub name: &'static str,
	pub label: &'static str,
	/// Timestamp field the flag sorts by.
	pub field: &'static str,
}

/// Field layout shared by every record of one screen.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
	/// Fields in display order.
	pub fields: &'static [FieldDef],
	/// Recent flags in priority order.
	pub recent: &'static [RecentKey],
}

impl Schema {
	/// Look up a field definition by name.
	#[must_use]
	pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
		self.fields.iter().find(|def| def.name == name)
	}

	/// Return the display position of a field.
	#[must_use]
	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|def| def.name == name)
	}

	/// Iterate over the fields shown in create/edit forms.
	pub fn editable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
		self.fields.iter().filter(|def| def.editable)
	}

	/// Look up a recent flag by name.
	#[must_use]
	pub fn recent(&self, name: &str) -> Option<&'static RecentKey> {
		self.recent.iter().find(|key| key.name == name)
	}

	/// Column headers in display order.
	#[must_use]
	pub fn headers(&self) -> Vec<&'static str> {
		self.fields.iter().map(|def| def.label).collect()
	}

	/// First text field, used to label records in messages.
	#[must_use]
	pub fn label_field(&self) -> Option<&'static FieldDef> {
		self.fields.iter().find(|def| def.kind == FieldKind::Text)
	}
}
