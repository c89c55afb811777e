pub mod log_notifier;
pub mod notifier;

pub use log_notifier::LogNotifier;
pub use notifier::Notifier;
