use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tabula_record_api::{Notification, NotificationKind};

use crate::style::Theme;

/// Render the toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification, theme: &Theme) {
	let toast_area = toast_area(area, &notification.message);
	if toast_area.width == 0 || toast_area.height == 0 {
		return;
	}
	let style = theme.notification_style(notification.kind);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.title(kind_title(notification.kind))
		.style(style);
	frame.render_widget(Clear, toast_area);
	frame.render_widget(
		Paragraph::new(notification.message.as_str()).block(block),
		toast_area,
	);
}

fn kind_title(kind: NotificationKind) -> &'static str {
	match kind {
		NotificationKind::Success => " Done ",
		NotificationKind::Info => " Info ",
		NotificationKind::Warning => " Warning ",
	}
}

fn toast_area(area: Rect, message: &str) -> Rect {
	let width = (Line::from(message).width() as u16)
		.saturating_add(4)
		.min(area.width);
	let height = 3u16.min(area.height);
	Rect {
		x: area.right().saturating_sub(width),
		y: area.bottom().saturating_sub(height),
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toast_hugs_the_bottom_right_corner() {
		let area = Rect::new(0, 0, 60, 20);
		assert_eq!(toast_area(area, "Saved"), Rect::new(51, 17, 9, 3));
		let narrow = toast_area(Rect::new(0, 0, 6, 2), "Saved");
		assert_eq!(narrow, Rect::new(0, 0, 6, 2));
	}
}
