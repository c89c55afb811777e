use crate::core::{AppError, Currency, Result};
use crate::modules::ledger::models::{LedgerSettings, DEFAULT_TAX_RATE};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

pub mod logging;

pub use logging::LogFormat;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub ledger: LedgerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Percentage prefilled into new tax-bearing rows
    pub default_tax_rate: Decimal,
    pub currency: Currency,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: lookup("LOG_FORMAT")
                    .unwrap_or_else(|| "pretty".to_string())
                    .parse()?,
            },
            ledger: LedgerConfig {
                default_tax_rate: match lookup("DEFAULT_TAX_RATE") {
                    Some(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
                        AppError::Configuration("Invalid DEFAULT_TAX_RATE".to_string())
                    })?,
                    None => DEFAULT_TAX_RATE,
                },
                currency: lookup("CURRENCY")
                    .unwrap_or_else(|| "INR".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid CURRENCY".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.ledger.default_tax_rate < Decimal::ZERO
            || self.ledger.default_tax_rate > Decimal::ONE_HUNDRED
        {
            return Err(AppError::Configuration(
                "Default tax rate must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }

    pub fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings::new(self.ledger.default_tax_rate)
    }
}
