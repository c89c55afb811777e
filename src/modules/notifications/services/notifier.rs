use async_trait::async_trait;

use crate::core::Result;
use crate::modules::notifications::models::Notification;

/// Presents a notification to the user (toast, alert, log line, ...)
///
/// This is the one seam a real deployment replaces with a submission
/// transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<()>;
}
