//! Every screen shipped with `tabula`, in tab order.

use tabula_record_api::{RegistryError, ScreenRegistry};

/// Register the document, FieldSense and project screens.
pub fn registry() -> Result<ScreenRegistry, RegistryError> {
	let mut registry = ScreenRegistry::new();
	registry.register_all(tabula_screens_documents::screens())?;
	registry.register_all(tabula_screens_fieldsense::screens())?;
	registry.register_all(tabula_screens_projects::screens())?;
	Ok(registry)
}
