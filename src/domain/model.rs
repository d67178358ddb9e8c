use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one successful `init` call.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport<T> {
    pub service: String,
    pub output: T,
    pub elapsed_ms: Option<u64>,
    pub completed_at: DateTime<Utc>,
}

impl<T: Serialize> InitReport<T> {
    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
