use crate::core::sequence::{INTAKE_SEQUENCE, SHIPMENT_SEQUENCE};
use crate::core::{AppError, InMemorySequenceGenerator, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub sequences: SequencesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Prefix and zero-padding for the per-entity record numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct SequencesConfig {
    pub shipment_prefix: String,
    pub intake_prefix: String,
    pub padding: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            sequences: SequencesConfig {
                shipment_prefix: env::var("SHIPMENT_SEQUENCE_PREFIX")
                    .unwrap_or_else(|_| "SHP".to_string()),
                intake_prefix: env::var("INTAKE_SEQUENCE_PREFIX")
                    .unwrap_or_else(|_| "RCP".to_string()),
                padding: env::var("SEQUENCE_PADDING")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid SEQUENCE_PADDING".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.sequences.shipment_prefix.trim().is_empty()
            || self.sequences.intake_prefix.trim().is_empty()
        {
            return Err(AppError::Configuration(
                "Sequence prefixes must not be empty".to_string(),
            ));
        }

        if self.sequences.padding == 0 {
            return Err(AppError::Configuration(
                "Sequence padding must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the sequence generator with both entity sequences registered.
    pub fn build_sequences(&self) -> InMemorySequenceGenerator {
        let sequences = InMemorySequenceGenerator::new();
        sequences.register(
            SHIPMENT_SEQUENCE,
            &self.sequences.shipment_prefix,
            self.sequences.padding,
        );
        sequences.register(
            INTAKE_SEQUENCE,
            &self.sequences.intake_prefix,
            self.sequences.padding,
        );
        sequences
    }
}

/// Initialize tracing with an env-filter derived from the configured level.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.app.log_level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
