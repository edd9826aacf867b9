//! Transient toast notifications with an owned dismiss deadline.

use std::time::{Duration, Instant};

/// How long a toast stays up unless dismissed.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
	Success,
	Info,
	Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub message: String,
	pub kind: NotificationKind,
}

impl Notification {
	#[must_use]
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: NotificationKind::Success,
		}
	}

	#[must_use]
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: NotificationKind::Info,
		}
	}

	#[must_use]
	pub fn warning(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: NotificationKind::Warning,
		}
	}
}

#[derive(Debug, Clone)]
struct ActiveToast {
	notification: Notification,
	deadline: Instant,
}

/// Holder for at most one visible notification.
///
/// The deadline lives with the notification it belongs to, so replacing or
/// dismissing a toast drops its pending expiry along with it.
#[derive(Debug, Clone)]
pub struct Toast {
	active: Option<ActiveToast>,
	duration: Duration,
}

impl Default for Toast {
	fn default() -> Self {
		Self::new(DEFAULT_TOAST_DURATION)
	}
}

impl Toast {
	#[must_use]
	pub const fn new(duration: Duration) -> Self {
		Self {
			active: None,
			duration,
		}
	}

	#[must_use]
	pub const fn duration(&self) -> Duration {
		self.duration
	}

	/// Show a notification, replacing any current one.
	pub fn show(&mut self, notification: Notification, now: Instant) {
		self.active = Some(ActiveToast {
			notification,
			deadline: now + self.duration,
		});
	}

	/// Close the toast manually. Returns whether one was visible.
	pub fn dismiss(&mut self) -> bool {
		self.active.take().is_some()
	}

	/// Expire the toast once its deadline has passed. Returns whether it expired.
	pub fn tick(&mut self, now: Instant) -> bool {
		match &self.active {
			Some(active) if now >= active.deadline => {
				self.active = None;
				true
			}
			_ => false,
		}
	}

	#[must_use]
	pub fn current(&self) -> Option<&Notification> {
		self.active.as_ref().map(|active| &active.notification)
	}

	/// Time left before the current toast expires.
	#[must_use]
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.active
			.as_ref()
			.map(|active| active.deadline.saturating_duration_since(now))
	}
}
