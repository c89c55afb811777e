use async_trait::async_trait;
use tracing::{error, info, warn};

use super::notifier::Notifier;
use crate::core::Result;
use crate::modules::notifications::models::{Notification, NotificationLevel};

/// Notifier that writes every notification to the development log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let payload = notification.payload.to_string();
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => info!(
                notification_level = %notification.level,
                title = %notification.title,
                %payload,
                "{}",
                notification.message
            ),
            NotificationLevel::Warning => warn!(
                title = %notification.title,
                %payload,
                "{}",
                notification.message
            ),
            NotificationLevel::Error => error!(
                title = %notification.title,
                %payload,
                "{}",
                notification.message
            ),
        }

        Ok(())
    }
}
