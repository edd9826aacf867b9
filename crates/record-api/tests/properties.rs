use std::num::NonZeroUsize;

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tabula_record_api::{
	BuildContext, Collection, FieldDef, FieldKind, FieldValue, FieldValues, FilterSet,
	FormSession, RecentKey, Record, RecordId, RowAction, Schema, SortSpec, SubmitOutcome,
	ValidationStyle, ViewState, ActionContext, ActionOutcome, apply_filters, apply_sort, arrange,
	dispatch, paginate, total_pages,
};

const TEAMS: &[&str] = &["Ops", "Sales", "Support"];

static FIELDS: &[FieldDef] = &[
	FieldDef::new("name", "Name", FieldKind::Text).required(),
	FieldDef::new("team", "Team", FieldKind::Choice(TEAMS)).required(),
	FieldDef::new("active", "Active", FieldKind::Flag),
	FieldDef::new("joined", "Joined", FieldKind::Date),
	FieldDef::new("added_on", "Added", FieldKind::Timestamp).read_only(),
];

static CONTACTS: Schema = Schema {
	fields: FIELDS,
	recent: &[RecentKey {
		name: "added",
		label: "Recently added",
		field: "added_on",
	}],
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Contact {
	id: RecordId,
	name: String,
	team: String,
	active: bool,
	joined: Option<NaiveDate>,
	added_on: NaiveDateTime,
}

impl Record for Contact {
	fn id(&self) -> RecordId {
		self.id
	}

	fn schema() -> &'static Schema {
		&CONTACTS
	}

	fn field(&self, name: &str) -> Option<FieldValue> {
		Some(match name {
			"name" => FieldValue::text(&self.name),
			"team" => FieldValue::choice(&self.team),
			"active" => FieldValue::Flag(self.active),
			"joined" => FieldValue::Date(self.joined),
			"added_on" => FieldValue::Timestamp(self.added_on),
			_ => return None,
		})
	}

	fn build(id: RecordId, values: &FieldValues, context: BuildContext<'_, Self>) -> Self {
		Self {
			id,
			name: values.text("name"),
			team: values.text("team"),
			active: values.flag("active"),
			joined: values.date("joined"),
			added_on: context.previous.map_or(context.now, |previous| previous.added_on),
		}
	}
}

fn base_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn contact_strategy() -> impl Strategy<Value = (String, usize, bool, Option<u16>, u32)> {
	(
		"[a-dA-D ]{0,6}",
		0..TEAMS.len(),
		any::<bool>(),
		proptest::option::of(0u16..20),
		0u32..10_000,
	)
}

fn collection_strategy() -> impl Strategy<Value = Collection<Contact>> {
	prop::collection::vec(contact_strategy(), 0..24).prop_map(|rows| {
		let records = rows
			.into_iter()
			.enumerate()
			.map(|(index, (name, team, active, joined, minutes))| Contact {
				id: RecordId(index as u64 + 1),
				name,
				team: TEAMS[team].to_string(),
				active,
				joined: joined.map(|days| base_date() + chrono::Days::new(u64::from(days))),
				added_on: base_date().and_hms_opt(0, 0, 0).unwrap()
					+ chrono::Duration::minutes(i64::from(minutes)),
			})
			.collect();
		Collection::seeded(records)
	})
}

fn filter_strategy() -> impl Strategy<Value = Vec<(&'static str, String)>> {
	let entry = prop_oneof![
		"[a-dA-D]{0,2}".prop_map(|value| ("name", value)),
		prop::sample::select(vec!["ops", "Sales", "SUPPORT", "", "Sal"])
			.prop_map(|value| ("team", value.to_string())),
		prop::sample::select(vec!["yes", "no", "true", "0", ""])
			.prop_map(|value| ("active", value.to_string())),
		(0u64..20).prop_map(|days| {
			let date = base_date() + chrono::Days::new(days);
			("joined", date.format("%Y-%m-%d").to_string())
		}),
	];
	prop::collection::vec(entry, 0..4)
}

fn build_filters(entries: &[(&'static str, String)]) -> FilterSet {
	let mut filters = FilterSet::new();
	for (field, value) in entries {
		filters
			.set(&CONTACTS, field, value)
			.unwrap_or_else(|err| panic!("filter on {field}: {err}"));
	}
	filters
}

/// Entries left in force once later writes replace earlier ones and blank
/// values clear their field.
fn effective_entries(entries: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
	let mut effective: Vec<(&'static str, String)> = Vec::new();
	for (field, value) in entries {
		effective.retain(|(existing, _)| existing != field);
		if !value.trim().is_empty() {
			effective.push((*field, value.trim().to_string()));
		}
	}
	effective
}

fn satisfies(record: &Contact, field: &str, candidate: &str) -> bool {
	match field {
		"name" => record.name.to_lowercase().contains(&candidate.to_lowercase()),
		"team" => record.team.eq_ignore_ascii_case(candidate),
		"active" => match candidate {
			"yes" | "true" => record.active,
			"no" | "0" => !record.active,
			other => panic!("unexpected flag spelling {other}"),
		},
		"joined" => record
			.joined
			.is_some_and(|date| date.format("%Y-%m-%d").to_string() == candidate),
		other => panic!("no filter strategy for {other}"),
	}
}

fn entry_matches(entries: &[(&'static str, String)], record: &Contact) -> bool {
	effective_entries(entries)
		.iter()
		.all(|(field, candidate)| satisfies(record, field, candidate))
}

fn size(n: usize) -> NonZeroUsize {
	NonZeroUsize::new(n).unwrap()
}

proptest! {
	#[test]
	fn empty_filters_are_the_identity(collection in collection_strategy()) {
		let filtered = apply_filters(collection.as_slice(), &FilterSet::new());
		let all: Vec<&Contact> = collection.iter().collect();
		prop_assert_eq!(filtered, all);
	}

	#[test]
	fn filters_are_sound_and_complete(
		collection in collection_strategy(),
		entries in filter_strategy(),
	) {
		let filters = build_filters(&entries);
		let filtered = apply_filters(collection.as_slice(), &filters);

		for record in &filtered {
			prop_assert!(entry_matches(&entries, record));
		}
		for record in collection.iter() {
			let kept = filtered.iter().any(|kept| kept.id == record.id);
			prop_assert_eq!(kept, entry_matches(&entries, record));
		}

		let order: Vec<u64> = filtered.iter().map(|record| record.id.get()).collect();
		let mut sorted = order.clone();
		sorted.sort_unstable();
		prop_assert_eq!(order, sorted);
	}

	#[test]
	fn pages_cover_the_arranged_records(
		collection in collection_strategy(),
		entries in filter_strategy(),
		page_size in 1usize..8,
		recent in any::<bool>(),
	) {
		let mut state = ViewState::with_page_size(size(page_size));
		state.filters = build_filters(&entries);
		if recent {
			state.sort = SortSpec::parse(&CONTACTS, "recent:added").unwrap();
		}
		let arranged = arrange(&collection, &state);
		let pages = total_pages(arranged.len(), state.page_size);

		let mut concatenated = Vec::new();
		for page in 1..=pages {
			let slice = paginate(&arranged, page, state.page_size);
			prop_assert!(slice.len() <= page_size);
			concatenated.extend_from_slice(slice);
		}
		prop_assert_eq!(&concatenated, &arranged);
		prop_assert!(paginate(&arranged, pages + 1, state.page_size).is_empty());
	}

	#[test]
	fn sorting_keeps_every_record(collection in collection_strategy(), spec in prop::sample::select(vec![
		"name", "team:desc,name", "joined:desc", "recent:added", "active,added_on",
	])) {
		let spec = SortSpec::parse(&CONTACTS, spec).unwrap();
		let mut sorted: Vec<u64> = apply_sort(collection.iter().collect(), &spec)
			.into_iter()
			.map(|record| record.id.get())
			.collect();
		sorted.sort_unstable();
		let expected: Vec<u64> = collection.iter().map(|record| record.id.get()).collect();
		prop_assert_eq!(sorted, expected);
	}

	#[test]
	fn recent_sort_is_descending(collection in collection_strategy()) {
		let spec = SortSpec::recent(&CONTACTS, "added").unwrap();
		let sorted = apply_sort(collection.iter().collect(), &spec);
		prop_assert!(sorted.windows(2).all(|pair| pair[0].added_on >= pair[1].added_on));
	}

	#[test]
	fn delete_removes_exactly_one(collection in collection_strategy(), pick in any::<prop::sample::Index>()) {
		prop_assume!(!collection.is_empty());
		let mut collection = collection;
		let id = collection.as_slice()[pick.index(collection.len())].id;
		let before = collection.len();

		let outcome = dispatch(RowAction::Delete, id, &mut collection, ActionContext::default());
		prop_assert!(matches!(outcome, Ok(ActionOutcome::Deleted(ref record)) if record.id == id));
		prop_assert_eq!(collection.len(), before - 1);
		prop_assert!(!collection.contains(id));
	}

	#[test]
	fn blank_required_fields_leave_the_collection_unchanged(
		collection in collection_strategy(),
		name in prop::sample::select(vec!["", "  ", "Ada"]),
		team in prop::sample::select(vec!["", "Ops"]),
	) {
		prop_assume!(name.trim().is_empty() || team.is_empty());
		let mut collection = collection;
		let snapshot = collection.as_slice().to_vec();
		let mut form = FormSession::create(&CONTACTS, ValidationStyle::Inline);
		form.set_input("name", name);
		form.set_input("team", team);

		let stamp = base_date().and_hms_opt(12, 0, 0).unwrap();
		let outcome = form.submit(&mut collection, stamp);
		prop_assert!(matches!(outcome, Ok(SubmitOutcome::Rejected(ref errors)) if !errors.is_empty()));
		prop_assert_eq!(collection.as_slice(), snapshot.as_slice());
	}
}

#[test]
fn paginating_nothing_yields_one_empty_page() {
	let empty: [Contact; 0] = [];
	assert!(paginate(&empty, 1, size(5)).is_empty());
	assert_eq!(total_pages(0, size(5)), 1);
}
