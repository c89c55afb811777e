pub mod forms;
pub mod ledger;
pub mod notifications;
pub mod taxes;
