//! Document management console: stored files and the folders that hold them.

mod files;
mod folders;

pub use files::{FILE_SCHEMA, FileKind, StoredFile};
pub use folders::{FOLDER_SCHEMA, Folder};

use chrono::{NaiveDate, NaiveDateTime};
use tabula_record_api::{
	Collection, RecordScreen, Screen, ScreenDescriptor, ScreenUiDefinition, ValidationStyle,
};

/// Console group shared by every screen in this crate.
pub const GROUP: &str = "documents";

/// People the share picker offers for documents.
pub static RECIPIENTS: &[&str] = &["Alice Johnson", "Bob Smith", "Carol Davis", "Design Team"];

pub static FILES_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "files",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Files",
		title: "All files",
		hint: "Search files by name, folder or owner",
		count_label: "files",
		noun: "file",
	},
};

pub static FOLDERS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "folders",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Folders",
		title: "Folders",
		hint: "Search folders",
		count_label: "folders",
		noun: "folder",
	},
};

#[must_use]
pub fn files_screen() -> RecordScreen<StoredFile> {
	RecordScreen::new(FILES_DESCRIPTOR, Collection::seeded(files::seed()))
		.with_recipients(RECIPIENTS)
}

/// The create-folder form refuses an empty name without showing a message.
#[must_use]
pub fn folders_screen() -> RecordScreen<Folder> {
	RecordScreen::new(FOLDERS_DESCRIPTOR, Collection::seeded(folders::seed()))
		.with_style(ValidationStyle::Silent)
		.with_recipients(RECIPIENTS)
}

/// Every document screen in tab order.
#[must_use]
pub fn screens() -> Vec<Box<dyn Screen>> {
	vec![Box::new(files_screen()), Box::new(folders_screen())]
}

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
	NaiveDate::from_ymd_opt(year, month, day)
		.and_then(|date| date.and_hms_opt(hour, minute, 0))
		.unwrap_or_default()
}
