use crate::core::{BaseService, InitReport, Result};
use chrono::Utc;
use std::time::Instant;

pub struct ServiceRunner<S: BaseService> {
    service: S,
    timing_enabled: bool,
}

impl<S: BaseService> ServiceRunner<S> {
    pub fn new(service: S) -> Self {
        Self::new_with_timing(service, true)
    }

    pub fn new_with_timing(service: S, timing_enabled: bool) -> Self {
        Self {
            service,
            timing_enabled,
        }
    }

    pub fn run(&mut self) -> Result<InitReport<S::Output>> {
        let name = self.service.name().to_string();
        tracing::info!("🚀 Initializing service {}", name);

        let started = Instant::now();
        let output = match self.service.init() {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(
                    "❌ Service {} failed to initialize: {} (Category: {:?}, Severity: {:?})",
                    name,
                    e,
                    e.category(),
                    e.severity()
                );
                return Err(e);
            }
        };

        let elapsed_ms = self
            .timing_enabled
            .then(|| u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX));
        if let Some(ms) = elapsed_ms {
            tracing::debug!("Service {} initialized in {}ms", name, ms);
        }
        tracing::info!("✅ Service {} initialized", name);

        Ok(InitReport {
            service: name,
            output,
            elapsed_ms,
            completed_at: Utc::now(),
        })
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn into_inner(self) -> S {
        self.service
    }
}
