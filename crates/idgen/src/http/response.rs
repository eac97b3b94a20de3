use serde::Serialize;
use ssid::{Ssid, SsidConfig};

/// The effective generator configuration echoed back to the caller.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBody {
    pub generator_id: u16,
    /// Epoch origin in milliseconds since the Unix epoch.
    pub start_time_ms: u64,
}

impl From<&SsidConfig> for ConfigBody {
    fn from(config: &SsidConfig) -> Self {
        Self {
            generator_id: config.generator_id,
            start_time_ms: u64::try_from(config.epoch().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Body of every `/ssid` response. Failures are reported in the body and the
/// status stays 200.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum SsidResponse {
    Generated { config: ConfigBody, ssids: Vec<Ssid> },
    Failed { error: String },
}

impl SsidResponse {
    pub fn generated(config: &SsidConfig, ssids: Vec<Ssid>) -> Self {
        Self::Generated {
            config: ConfigBody::from(&config.resolve()),
            ssids,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }
}
