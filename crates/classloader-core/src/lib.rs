//! Class registry for the class loader.
//!
//! Independently written components register concrete implementations of a
//! shared base interface under a class name. Consumers later ask the
//! [`LibraryManager`] for a new instance by interface and name, without
//! knowing the concrete type.
//!
//! Registration is either explicit ([`LibraryManager::register`]) or
//! declarative ([`register_class!`]). Declarative registrations are only
//! recorded where they are written; the composition root applies them with
//! [`LibraryManager::install_collected`] and then [`LibraryManager::seal`]s
//! the registry before it serves lookups.

use thiserror::Error;

pub mod descriptor;
pub mod manager;
pub mod registration;

pub use classloader_types::{BaseInterface, Implements, InterfaceId};
pub use descriptor::{DescriptorInfo, FactoryDescriptor};
pub use manager::{InstallSummary, LibraryManager, LibraryScope};
pub use registration::Registration;

#[doc(hidden)]
pub use inventory;

/// Reasons a registration is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// The class name is empty.
	#[error("Empty class name for interface {0}")]
	EmptyClassName(InterfaceId),
	/// The registration phase has ended.
	#[error("Registry is sealed, class '{class}' for interface {interface} was not registered")]
	Sealed { interface: InterfaceId, class: String },
	/// The registry has been shut down.
	#[error("Registry has been shut down")]
	ShutDown,
	/// The interface token is already bound to a different Rust type.
	#[error("Interface token '{interface}' is bound to {bound}, cannot be claimed by {claimed}")]
	InterfaceConflict {
		interface: InterfaceId,
		bound: &'static str,
		claimed: &'static str,
	},
}

/// Reasons a lookup produces no instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// Nothing was ever registered for the interface.
	#[error("No classes registered for interface {0}")]
	UnknownInterface(InterfaceId),
	/// The interface is known but the class name is not.
	#[error("No class '{class}' registered for interface {interface}")]
	UnknownClass { interface: InterfaceId, class: String },
	/// The stored descriptor does not belong to the requested interface type.
	#[error("Descriptor registered for interface {0} has a different type")]
	InterfaceMismatch(InterfaceId),
	/// The registry has been shut down.
	#[error("Registry has been shut down")]
	ShutDown,
}

impl LookupError {
	/// True for the two "no such registration" cases.
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			LookupError::UnknownInterface(_) | LookupError::UnknownClass { .. }
		)
	}
}

/// Result of a single registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
	/// A new descriptor was inserted.
	Registered,
	/// The name was taken; the existing descriptor was kept.
	Duplicate,
	/// The registration was refused before the duplicate check.
	Rejected(RegistryError),
}

impl RegisterOutcome {
	pub fn is_registered(&self) -> bool {
		matches!(self, RegisterOutcome::Registered)
	}
}
