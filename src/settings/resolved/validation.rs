use tabula_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"ui.page_size",
			config.page_size.to_string(),
			sources.source_for_page_size(),
			"must be at least 1",
		));
	}

	if config.toast_millis == 0 {
		return Err(ConfigError::invalid(
			"ui.toast_millis",
			config.toast_millis.to_string(),
			sources.source_for_toast_millis(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = config.theme.as_deref()
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!("expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}
