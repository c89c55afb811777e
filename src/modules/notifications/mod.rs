// Notification boundary: where a submitted form is announced to the user

pub mod models;
pub mod services;

pub use models::{Notification, NotificationLevel};
pub use services::{LogNotifier, Notifier};
