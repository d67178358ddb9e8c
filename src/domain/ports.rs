//! The service capability contract.
//!
//! Every concrete service implements [`BaseService`]. The compiler enforces the
//! contract: an implementation that leaves out `init` is rejected.
//!
//! ```compile_fail
//! use base_service::BaseService;
//!
//! struct Incomplete;
//!
//! impl BaseService for Incomplete {
//!     type Output = ();
//! }
//! ```
//!
//! The contract itself is not a value and cannot be constructed:
//!
//! ```compile_fail
//! use base_service::BaseService;
//!
//! fn build() -> dyn BaseService<Output = ()> {
//!     unimplemented!()
//! }
//! ```

use crate::utils::error::Result;

pub const CONTRACT_NAME: &str = "BaseService";
pub const REQUIRED_CAPABILITY: &str = "init";

/// Required capability of every service.
///
/// `init` takes no arguments. Implementors pick `Output`, which is `()` when
/// initialization yields nothing.
///
/// ```
/// use base_service::{BaseService, Result};
///
/// struct Noop;
///
/// impl BaseService for Noop {
///     type Output = ();
///
///     fn init(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// assert!(Noop.init().is_ok());
/// ```
pub trait BaseService {
    type Output;

    fn init(&mut self) -> Result<Self::Output>;

    /// Name used in logs and error messages.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<S: BaseService + ?Sized> BaseService for Box<S> {
    type Output = S::Output;

    fn init(&mut self) -> Result<Self::Output> {
        (**self).init()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

fn short_type_name(full: &str) -> &str {
    // tuples, slices and references are not paths
    if full.starts_with(['(', '[', '&']) {
        return full;
    }
    // `a::b::Echo<c::D>` -> `Echo<c::D>`
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
