pub mod echo;

pub use echo::{EchoService, DEFAULT_SENTINEL};
