use crate::error::OffError;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub country: String,
    pub timeout_ms: u64,
    pub debug: bool,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigDefaults {
    country: Option<String>,
    timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn load(
        country: Option<String>,
        timeout: Option<u64>,
        debug: bool,
    ) -> Result<Self, OffError> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("off-cli");

        let file_config = load_config_file(&config_dir);

        // Priority: CLI flags → env vars → config file → defaults
        let country_env = std::env::var("OFF_COUNTRY").ok();
        let timeout_env = std::env::var("OFF_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok());

        let country = country
            .or(country_env)
            .or(file_config.defaults.country)
            .unwrap_or_else(|| "world".to_string());

        let timeout_ms = timeout
            .or(timeout_env)
            .or(file_config.defaults.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self::validate_country(&country)?;

        Ok(AppConfig {
            country,
            timeout_ms,
            debug,
        })
    }

    pub fn validate_country(country: &str) -> Result<(), OffError> {
        const KNOWN_COUNTRIES: &[&str] = &[
            "world",
            "us", "ca", "mx", "br", "ar", "cl", "co",
            "uk", "ie", "fr", "de", "es", "it", "pt", "nl", "be", "at", "ch",
            "se", "no", "dk", "fi", "pl", "cz", "gr", "ro", "hu", "bg",
            "ru", "tr", "il", "sa", "ae", "eg", "ma", "tn", "dz",
            "in", "cn", "jp", "kr", "th", "my", "sg", "ph", "id", "vn",
            "au", "nz", "za",
        ];
        if !KNOWN_COUNTRIES.contains(&country) {
            return Err(OffError::Config(format!(
                "Unknown country code '{}'. Open Food Facts may not serve this subdomain. Known codes include: world, us, uk, fr, de, es, it, etc.",
                country
            )));
        }
        Ok(())
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.openfoodfacts.org", self.country)
    }
}

fn load_config_file(config_dir: &PathBuf) -> ConfigFile {
    let config_path = config_dir.join("config.toml");
    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => ConfigFile::default(),
        }
    } else {
        ConfigFile::default()
    }
}
