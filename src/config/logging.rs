use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::AppConfig;
use crate::core::AppError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set. Logs go to stderr so stdout
/// stays clean for command output.
pub fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("formledger={}", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
