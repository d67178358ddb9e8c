use crate::core::{BaseService, Result, REQUIRED_CAPABILITY};
use crate::core::abstract_service::AbstractService;
use crate::utils::error::ServiceError;
use std::fmt;

type InitFn<T> = Box<dyn FnMut() -> Result<T> + Send>;

/// A service declared at runtime instead of as a Rust type.
///
/// Conformance is checked by [`ServiceDefinition::instantiate`]: the abstract
/// contract is never instantiable, and a concrete definition must carry an
/// `init` body before it can be built.
pub struct ServiceDefinition<T> {
    name: String,
    is_abstract: bool,
    init: Option<InitFn<T>>,
}

impl<T> ServiceDefinition<T> {
    /// Declares the abstract contract. Instantiation always fails, even if an
    /// `init` body is attached.
    pub fn abstract_contract(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: true,
            init: None,
        }
    }

    pub fn concrete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            init: None,
        }
    }

    pub fn with_init<F>(mut self, init: F) -> Self
    where
        F: FnMut() -> Result<T> + Send + 'static,
    {
        self.init = Some(Box::new(init));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn has_init(&self) -> bool {
        self.init.is_some()
    }

    pub fn instantiate(self) -> Result<DefinedService<T>> {
        if self.is_abstract {
            tracing::warn!("Refusing to instantiate abstract service {}", self.name);
            return Err(AbstractService::refusal(&self.name));
        }

        match self.init {
            Some(init) => {
                tracing::debug!("Instantiated service {}", self.name);
                Ok(DefinedService {
                    name: self.name,
                    init,
                })
            }
            None => {
                tracing::warn!(
                    "Service {} is missing required operation {}",
                    self.name,
                    REQUIRED_CAPABILITY
                );
                Err(ServiceError::MissingCapability {
                    service: self.name,
                    capability: REQUIRED_CAPABILITY.to_string(),
                })
            }
        }
    }
}

impl<T> fmt::Debug for ServiceDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDefinition")
            .field("name", &self.name)
            .field("is_abstract", &self.is_abstract)
            .field("has_init", &self.has_init())
            .finish()
    }
}

/// A concrete service built from a [`ServiceDefinition`].
pub struct DefinedService<T> {
    name: String,
    init: InitFn<T>,
}

impl<T> BaseService for DefinedService<T> {
    type Output = T;

    fn init(&mut self) -> Result<T> {
        (self.init)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T> fmt::Debug for DefinedService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinedService")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_contract_with_init_is_still_refused() {
        let definition = ServiceDefinition::abstract_contract("BaseService").with_init(|| Ok(1));
        assert!(definition.has_init());

        let err = definition.instantiate().unwrap_err();
        assert!(matches!(err, ServiceError::AbstractInstantiation { .. }));
    }

    #[test]
    fn test_debug_does_not_require_debug_output() {
        struct Opaque;

        let definition = ServiceDefinition::concrete("opaque").with_init(|| Ok(Opaque));
        let rendered = format!("{:?}", definition);
        assert!(rendered.contains("opaque"));
        assert!(rendered.contains("has_init: true"));
    }
}
