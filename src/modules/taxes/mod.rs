pub mod services;

pub use services::TaxCalculator;
