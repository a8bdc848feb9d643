use anyhow::Result;
use config::Config;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct AppConfig {
    pub bind_address: String,
    pub max_entry_length: usize,
    pub min_analysis_length: usize,
    pub analysis_delay_ms: Option<u64>,
    pub seed_demo_data: bool,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_address: "0.0.0.0:3000".to_string(),
            max_entry_length: 10_000,
            min_analysis_length: 20,
            analysis_delay_ms: None,
            seed_demo_data: false,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Validates the loaded configuration
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(anyhow::anyhow!("bind_address cannot be empty"));
        }

        if self.max_entry_length == 0 || self.max_entry_length > 100_000 {
            return Err(anyhow::anyhow!("max_entry_length must be between 1 and 100000"));
        }

        if self.min_analysis_length >= self.max_entry_length {
            return Err(anyhow::anyhow!(
                "min_analysis_length must be below max_entry_length"
            ));
        }

        if let Some(delay) = self.analysis_delay_ms {
            if delay > 5_000 {
                return Err(anyhow::anyhow!("analysis_delay_ms must not exceed 5000"));
            }
        }

        Ok(())
    }
}

pub fn load_config() -> Result<AppConfig> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let defaults = AppConfig::default();
    let settings = Config::builder()
        .set_default("bind_address", defaults.bind_address)?
        .set_default("max_entry_length", defaults.max_entry_length as i64)?
        .set_default("min_analysis_length", defaults.min_analysis_length as i64)?
        .set_default("seed_demo_data", defaults.seed_demo_data)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("MINDSAFE"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
