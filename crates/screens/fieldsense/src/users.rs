use tabula_record_api::{
	BuildContext, FieldDef, FieldKind, FieldValue, FieldValues, Record, RecordId, Schema,
};

const ROLES: &[&str] = &["Admin", "Manager", "Field Executive"];

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Name", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("email", "Email", FieldKind::Text)
		.required()
		.width(3),
	FieldDef::new("role", "Role", FieldKind::Choice(ROLES))
		.required()
		.width(2),
	FieldDef::new("department", "Department", FieldKind::Text).width(2),
	FieldDef::new("active", "Active", FieldKind::Flag),
];

pub static USER_SCHEMA: Schema = Schema {
	fields: FIELDS,
	recent: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
	pub id: RecordId,
	pub name: String,
	pub email: String,
	pub role: String,
	pub department: String,
	pub active: bool,
}

impl Record for User {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&USER_SCHEMA
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"email" => FieldValue::text(&self.email),
			"role" => FieldValue::choice(&self.role),
			"department" => FieldValue::text(&self.department),
			"active" => FieldValue::Flag(self.active),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, _context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			email: values.text("email"),
			role: values.text("role"),
			department: values.text("department"),
			active: values.flag("active"),
		}
	}
}

pub(crate) fn seed() -> Vec<User> {
	[
		(1, "Rahul Mehta", "rahul@fieldsense.io", "Admin", "Operations", true),
		(2, "Sneha Iyer", "sneha@fieldsense.io", "Manager", "Sales", true),
		(3, "Arjun Nair", "arjun@fieldsense.io", "Field Executive", "Sales", true),
		(4, "Divya Menon", "divya@fieldsense.io", "Field Executive", "Support", false),
		(5, "Farhan Ali", "farhan@fieldsense.io", "Manager", "Support", true),
	]
	.into_iter()
	.map(|(id, name, email, role, department, active)| User {
		id: RecordId(id),
		name: name.to_string(),
		email: email.to_string(),
		role: role.to_string(),
		department: department.to_string(),
		active,
	})
	.collect()
}
