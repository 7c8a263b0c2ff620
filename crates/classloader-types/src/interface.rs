//! Base-interface identity and the conformance traits used by the registry.
//!
//! A base interface is a trait object type such as `dyn Module`. It is keyed
//! in the registry by an [`InterfaceId`], a token chosen by the author of the
//! interface, so the key stays the same across compilation units and binaries.
//! Concrete types opt in to an interface through [`Implements`], which only
//! compiles when the concrete type really implements the trait.

use serde::Serialize;
use std::fmt;

/// Stable, programmer-assigned token naming a base interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InterfaceId(&'static str);

impl InterfaceId {
	/// Creates an identity from a static token.
	pub const fn new(token: &'static str) -> Self {
		Self(token)
	}

	/// Returns the token.
	pub const fn as_str(&self) -> &'static str {
		self.0
	}
}

impl fmt::Display for InterfaceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

/// A type that can key a per-interface registry.
///
/// Implemented for trait object types, normally through [`declare_interface!`].
///
/// [`declare_interface!`]: crate::declare_interface
pub trait BaseInterface: 'static {
	/// The token identifying this interface.
	const ID: InterfaceId;
}

/// Proof that `Self` conforms to the base interface `B`.
///
/// The only job of an implementation is the unsizing coercion from the
/// concrete box to the trait object box, which the compiler rejects when
/// `Self` does not implement the trait behind `B`.
pub trait Implements<B: ?Sized + BaseInterface>: 'static {
	/// Converts an owned concrete instance into the interface handle.
	fn upcast(self: Box<Self>) -> Box<B>;
}

/// Declares a trait object type as a base interface.
///
/// ```ignore
/// pub trait Codec: Send + Sync { fn encode(&self, input: &[u8]) -> Vec<u8>; }
/// declare_interface!(dyn Codec, "Codec");
/// ```
#[macro_export]
macro_rules! declare_interface {
	($iface:ty, $token:expr) => {
		impl $crate::BaseInterface for $iface {
			const ID: $crate::InterfaceId = $crate::InterfaceId::new($token);
		}
	};
}

/// Declares that a concrete type conforms to a base interface.
///
/// ```ignore
/// implements!(Base64Codec => dyn Codec);
/// ```
#[macro_export]
macro_rules! implements {
	($concrete:ty => $iface:ty) => {
		impl $crate::Implements<$iface> for $concrete {
			fn upcast(self: Box<Self>) -> Box<$iface> {
				self
			}
		}
	};
}
