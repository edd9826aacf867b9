use chrono::NaiveDate;
use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

use crate::day;

pub const INDUSTRIES: &[&str] = &["IT", "Healthcare", "Finance", "Manufacturing", "Retail"];
const STATUSES: &[&str] = &["Active", "Inactive"];

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Client name", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("contact_person", "Contact person", FieldKind::Text)
		.required()
		.width(2),
	FieldDef::new("email", "Email", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("phone", "Phone", FieldKind::Text).width(2),
	FieldDef::new("industry", "Industry", FieldKind::Choice(INDUSTRIES))
		.required()
		.width(2),
	FieldDef::new("city", "City", FieldKind::Text),
	FieldDef::new("status", "Status", FieldKind::Choice(STATUSES)).required(),
	FieldDef::new("onboarded_on", "Onboarded", FieldKind::Date),
];

pub static CLIENT_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
	pub id: RecordId,
	pub name: String,
	pub contact_person: String,
	pub email: String,
	pub phone: String,
	pub industry: String,
	pub city: String,
	pub status: String,
	pub onboarded_on: Option<NaiveDate>,
}

impl Record for Client {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&CLIENT_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"contact_person" => FieldValue::text(&self.contact_person),
			"email" => FieldValue::text(&self.email),
			"phone" => FieldValue::text(&self.phone),
			"industry" => FieldValue::choice(&self.industry),
			"city" => FieldValue::text(&self.city),
			"status" => FieldValue::choice(&self.status),
			"onboarded_on" => FieldValue::Date(self.onboarded_on),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			contact_person: values.text("contact_person"),
			email: values.text("email"),
			phone: values.text("phone"),
			industry: values.text("industry"),
			city: values.text("city"),
			status: values.text("status"),
			onboarded_on: values.date("onboarded_on"),
		}
	}
}

pub(crate) fn seed() -> Vec<Client> {
	[
		(
			1,
			"Tech Solutions Inc",
			"John Carter",
			"john@techsolutions.com",
			"+1 555 0101",
			"IT",
			"San Francisco",
			"Active",
			day(2023, 3, 14),
		),
		(
			2,
			"Green Valley Healthcare",
			"Maria Lopez",
			"maria@greenvalley.org",
			"+1 555 0144",
			"Healthcare",
			"Denver",
			"Active",
			day(2023, 6, 2),
		),
		(
			3,
			"Summit Finance Group",
			"David Kim",
			"dkim@summitfinance.com",
			"+1 555 0178",
			"Finance",
			"New York",
			"Inactive",
			day(2022, 11, 21),
		),
		(
			4,
			"BuildRight Manufacturing",
			"Priya Shah",
			"priya@buildright.com",
			"+1 555 0192",
			"Manufacturing",
			"Detroit",
			"Active",
			day(2024, 1, 8),
		),
		(
			5,
			"Urban Retail Co",
			"Tom Becker",
			"tom@urbanretail.co",
			"+1 555 0123",
			"Retail",
			"Chicago",
			"Active",
			None,
		),
	]
	.into_iter()
	.map(
		|(id, name, contact_person, email, phone, industry, city, status, onboarded_on)| Client {
			id: RecordId(id),
			name: name.to_string(),
			contact_person: contact_person.to_string(),
			email: email.to_string(),
			phone: phone.to_string(),
			industry: industry.to_string(),
			city: city.to_string(),
			status: status.to_string(),
			onboarded_on,
		},
	)
	.collect()
}
