//! FieldSense field-force and HR console.

mod clients;
mod leave;
mod users;
mod visits;

pub use clients::{CLIENT_SCHEMA, Client, INDUSTRIES};
pub use leave::{LEAVE_SCHEMA, LeaveRequest};
pub use users::{USER_SCHEMA, User};
pub use visits::{VISIT_SCHEMA, Visit};

use chrono::NaiveDate;
use tabula_record_api::{Collection, RecordScreen, Screen, ScreenDescriptor, ScreenUiDefinition};

pub const GROUP: &str = "fieldsense";

/// Managers the share picker offers.
pub static RECIPIENTS: &[&str] = &["Rahul Mehta", "Sneha Iyer", "Arjun Nair", "HR Desk"];

pub static CLIENTS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "clients",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Clients",
		title: "Client directory",
		hint: "Search clients by name, contact or city",
		count_label: "clients",
		noun: "client",
	},
};

pub static LEAVE_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "leave",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Leave",
		title: "Leave requests",
		hint: "Search leave requests by employee or reason",
		count_label: "leave requests",
		noun: "leave request",
	},
};

pub static VISITS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "visits",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Visits",
		title: "Client visits",
		hint: "Search visits by client, executive or purpose",
		count_label: "visits",
		noun: "visit",
	},
};

pub static USERS_DESCRIPTOR: ScreenDescriptor = ScreenDescriptor {
	id: "users",
	group: GROUP,
	ui: ScreenUiDefinition {
		tab_label: "Users",
		title: "User management",
		hint: "Search users by name, email or department",
		count_label: "users",
		noun: "user",
	},
};

#[must_use]
pub fn clients_screen() -> RecordScreen<Client> {
	RecordScreen::new(CLIENTS_DESCRIPTOR, Collection::seeded(clients::seed()))
		.with_recipients(RECIPIENTS)
}

#[must_use]
pub fn leave_screen() -> RecordScreen<LeaveRequest> {
	RecordScreen::new(LEAVE_DESCRIPTOR, Collection::seeded(leave::seed()))
		.with_recipients(RECIPIENTS)
}

#[must_use]
pub fn visits_screen() -> RecordScreen<Visit> {
	RecordScreen::new(VISITS_DESCRIPTOR, Collection::seeded(visits::seed()))
		.with_recipients(RECIPIENTS)
}

#[must_use]
pub fn users_screen() -> RecordScreen<User> {
	RecordScreen::new(USERS_DESCRIPTOR, Collection::seeded(users::seed()))
		.with_recipients(RECIPIENTS)
}

/// Every FieldSense screen in tab order.
#[must_use]
pub fn screens() -> Vec<Box<dyn Screen>> {
	vec![
		Box::new(clients_screen()),
		Box::new(leave_screen()),
		Box::new(visits_screen()),
		Box::new(users_screen()),
	]
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
	NaiveDate::from_ymd_opt(year, month, day)
}
