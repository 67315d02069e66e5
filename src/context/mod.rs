//! Process-wide flow state as an explicit, owned object.
//!
//! Status that would otherwise live in free-floating globals (for example
//! whether a chat widget has finished loading) is held in a
//! [`FlowRegistry`] that the application constructs once and passes by
//! reference.

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{FlowRegistry, Lifecycle};
