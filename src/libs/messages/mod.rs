//! User-facing message catalogue and the output macros built on it.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
