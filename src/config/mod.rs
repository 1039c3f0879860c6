use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Filter directive used when neither the config nor `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_DIRECTIVE: &str = "ledger_core=info";

/// Session start-up options. Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LedgerConfig {
    pub seed_sample_data: bool,
    pub first_id: u64,
    pub log_directive: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: false,
            first_id: 1,
            log_directive: DEFAULT_LOG_DIRECTIVE.into(),
        }
    }
}

impl LedgerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
