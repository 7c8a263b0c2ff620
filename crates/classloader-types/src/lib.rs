//! Common types for the class loader.
//!
//! This crate holds the vocabulary shared by the registry and by every crate
//! that contributes classes to it: how a base interface is identified, how a
//! concrete type proves that it conforms to an interface, and how a plugin
//! validates its TOML configuration.

/// Base-interface identity and conformance traits.
pub mod interface;
/// Configuration validation types for plugin settings.
pub mod validation;

pub use interface::{BaseInterface, Implements, InterfaceId};
pub use validation::*;
