//! Formledger
//!
//! Dynamic line-item ledgers for the invoice, purchase-order and
//! material-return forms, with the thin form shell that validates them and
//! hands the submitted payload to a notifier.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::forms;
pub use modules::ledger;
pub use modules::notifications;
pub use modules::taxes;
