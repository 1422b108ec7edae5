// Engine settings, loaded from a JSON file or defaulted.
use super::durations::Durations;
use crate::error::EngineError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    pub durations: Durations,
    pub reduced_durations: Durations,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            durations: Durations::standard(),
            reduced_durations: Durations::reduced(),
        }
    }
}

impl EngineSettings {
    /// Environment variable holding the path of a JSON settings file.
    pub const CONFIG_ENV: &'static str = "FI_CALC_CONFIG";

    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded engine settings");
        Ok(settings)
    }

    /// Reads the file named by `FI_CALC_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self, EngineError> {
        match std::env::var_os(Self::CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                tracing::info!("{} not set, using default engine settings", Self::CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn durations_for(&self, reduced: bool) -> &Durations {
        if reduced {
            &self.reduced_durations
        } else {
            &self.durations
        }
    }
}
