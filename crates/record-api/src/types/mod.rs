mod field;
mod record;
mod value;

pub use field::{FieldDef, FieldKind, RecentKey, Schema};
pub use record::{BuildContext, FieldValues, Record, RecordId};
pub use value::{DATE_FORMAT, FieldValue, FileRef, TIMESTAMP_FORMAT};
pub(crate) use value::flag_label;
