use crate::core::{BaseService, Result};

pub const DEFAULT_SENTINEL: &str = "echo";

/// Returns its sentinel from `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoService {
    sentinel: String,
}

impl EchoService {
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}

impl Default for EchoService {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

impl BaseService for EchoService {
    type Output = String;

    fn init(&mut self) -> Result<String> {
        tracing::debug!("EchoService returning sentinel {:?}", self.sentinel);
        Ok(self.sentinel.clone())
    }
}
