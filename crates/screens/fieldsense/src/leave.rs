use chrono::NaiveDate;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

use crate::day;

const LEAVE_TYPES: &[&str] = &["Sick", "Casual", "Earned", "Unpaid"];
const STATUSES: &[&str] = &["Pending", "Approved", "Rejected"];

static FIELDS: &[FieldDef] = &[
	FieldDef::new("employee", "Employee", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("leave_type", "Leave type", FieldKind::Choice(LEAVE_TYPES)).required(),
	FieldDef::new("from_date", "From", FieldKind::Date).required(),
	FieldDef::new("to_date", "To", FieldKind::Date).required(),
	FieldDef::new("reason", "Reason", FieldKind::Text).width(4),
	FieldDef::new("status", "Status", FieldKind::Choice(STATUSES)).required(),
];

pub static LEAVE_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
	pub id: RecordId,
	pub employee: String,
	pub leave_type: String,
	pub from_date: Option<NaiveDate>,
	pub to_date: Option<NaiveDate>,
	pub reason: String,
	pub status: String,
}

impl LeaveRequest {
	/// Inclusive length of the leave in days, when both ends are set.
	#[must_use]
	pub fn days(&self) -> Option<i64> {
		let (from, to) = (self.from_date?, self.to_date?);
		Some((to - from).num_days() + 1)
	}
}

impl Record for LeaveRequest {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&LEAVE_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"employee" => FieldValue::text(&self.employee),
			"leave_type" => FieldValue::choice(&self.leave_type),
			"from_date" => FieldValue::Date(self.from_date),
			"to_date" => FieldValue::Date(self.to_date),
			"reason" => FieldValue::text(&self.reason),
			"status" => FieldValue::choice(&self.status),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			employee: values.text("employee"),
			leave_type: values.text("leave_type"),
			from_date: values.date("from_date"),
			to_date: values.date("to_date"),
			reason: values.text("reason"),
			status: values.text("status"),
		}
	}
}

pub(crate) fn seed() -> Vec<LeaveRequest> {
	[
		(1, "Anita Desai", "Sick", day(2024, 3, 4), day(2024, 3, 5), "Fever", "Approved"),
		(2, "Karan Malhotra", "Casual", day(2024, 3, 18), day(2024, 3, 18), "Family function", "Pending"),
		(3, "Meera Pillai", "Earned", day(2024, 4, 1), day(2024, 4, 10), "Vacation", "Approved"),
		(4, "Vikram Rao", "Unpaid", day(2024, 2, 12), day(2024, 2, 16), "Personal work", "Rejected"),
		(5, "Sana Qureshi", "Sick", day(2024, 3, 21), day(2024, 3, 22), "Dental surgery", "Pending"),
		(6, "Rohit Verma", "Casual", day(2024, 4, 5), day(2024, 4, 5), "Moving house", "Pending"),
	]
	.into_iter()
	.map(|(id, employee, leave_type, from_date, to_date, reason, status)| LeaveRequest {
		id: RecordId(id),
		employee: employee.to_string(),
		leave_type: leave_type.to_string(),
		from_date,
		to_date,
		reason: reason.to_string(),
		status: status.to_string(),
	})
	.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn leave_length_is_inclusive() {
		let requests = seed();
		assert_eq!(requests[0].days(), Some(2));
		assert_eq!(requests[1].days(), Some(1));
		assert_eq!(requests[2].days(), Some(10));
	}
}
