//! Shared record model and the tabular view pipeline used by every `tabula` screen.
//!
//! A screen owns a [`Collection`] of typed records. Views over that collection are
//! derived by [`apply_filters`], [`apply_sort`] and [`paginate`], in that order,
//! without ever mutating the source. Forms, row actions and transient
//! notifications live here as well so the terminal front-end only has to render
//! and forward key presses.

pub mod action;
pub mod collection;
pub mod error;
pub mod filter;
pub mod form;
pub mod notification;
pub mod page;
pub mod screen;
pub mod sort;
pub mod types;
pub mod view;

pub use action::{ActionContext, ActionOutcome, RowAction, ShareRequest, dispatch};
pub use collection::Collection;
pub use error::{RecordError, RegistryError, ViewError};
pub use filter::{FilterSet, apply_filters, field_matches, parse_flag};
pub use form::{
	FormDraft, FormMode, FormSession, SubmitOutcome, ValidationErrors, ValidationStyle, validate,
};
pub use notification::{DEFAULT_TOAST_DURATION, Notification, NotificationKind, Toast};
pub use page::{DEFAULT_PAGE_SIZE, PageInfo, clamp_page, default_page_size, paginate, total_pages};
pub use screen::{
	RecordScreen, Screen, ScreenAction, ScreenDescriptor, ScreenRegistry, ScreenUiDefinition,
};
pub use sort::{RecentFlags, SortDirection, SortKey, SortSpec, apply_sort};
pub use types::{
	BuildContext, DATE_FORMAT, FieldDef, FieldKind, FieldValue, FieldValues, FileRef, RecentKey,
	Record, RecordId, Schema, TIMESTAMP_FORMAT,
};
pub use view::{ProjectedPage, ProjectedRow, ViewPage, ViewState, arrange, project};
