//! Factory descriptors.
//!
//! A [`FactoryDescriptor`] knows how to build exactly one concrete type and
//! hand it out through exactly one base interface. The registry stores
//! descriptors of many interfaces side by side, so it only sees them through
//! the object-safe [`ErasedDescriptor`] view and recovers the typed
//! descriptor by downcasting when a caller asks for a specific interface.

use classloader_types::{BaseInterface, Implements, InterfaceId};
use serde::Serialize;
use std::any::Any;

/// Diagnostic description of a registered class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorInfo {
	/// Name the class is registered under.
	pub class_name: String,
	/// Display name of the base interface, as given at registration.
	pub base_class_name: String,
	/// Identity of the base interface.
	pub interface: InterfaceId,
	/// Library (component) that registered the class, if any.
	pub library: Option<String>,
}

/// Builds instances of one concrete type as `Box<B>`.
pub struct FactoryDescriptor<B: ?Sized + BaseInterface> {
	info: DescriptorInfo,
	construct: fn() -> Box<B>,
}

fn construct<B, C>() -> Box<B>
where
	B: ?Sized + BaseInterface,
	C: Implements<B> + Default,
{
	<C as Implements<B>>::upcast(Box::new(C::default()))
}

impl<B: ?Sized + BaseInterface> FactoryDescriptor<B> {
	/// Creates the descriptor for concrete type `C`.
	///
	/// `C` must implement [`Implements<B>`], so a descriptor for a type that
	/// does not conform to the interface cannot be built.
	pub fn new<C>(
		class_name: impl Into<String>,
		base_class_name: impl Into<String>,
		library: Option<&str>,
	) -> Self
	where
		C: Implements<B> + Default,
	{
		Self {
			info: DescriptorInfo {
				class_name: class_name.into(),
				base_class_name: base_class_name.into(),
				interface: B::ID,
				library: library.map(str::to_string),
			},
			construct: construct::<B, C>,
		}
	}

	/// Allocates a new, independently owned instance.
	pub fn create(&self) -> Box<B> {
		(self.construct)()
	}

	pub fn info(&self) -> &DescriptorInfo {
		&self.info
	}

	pub fn class_name(&self) -> &str {
		&self.info.class_name
	}

	pub(crate) fn constructor(&self) -> fn() -> Box<B> {
		self.construct
	}
}

impl<B: ?Sized + BaseInterface> Clone for FactoryDescriptor<B> {
	fn clone(&self) -> Self {
		Self {
			info: self.info.clone(),
			construct: self.construct,
		}
	}
}

impl<B: ?Sized + BaseInterface> std::fmt::Debug for FactoryDescriptor<B> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FactoryDescriptor")
			.field("info", &self.info)
			.finish_non_exhaustive()
	}
}

/// Interface-agnostic view of a descriptor, as stored by the registry.
pub(crate) trait ErasedDescriptor: Send + Sync {
	fn info(&self) -> &DescriptorInfo;
	fn as_any(&self) -> &dyn Any;
}

impl<B: ?Sized + BaseInterface> ErasedDescriptor for FactoryDescriptor<B> {
	fn info(&self) -> &DescriptorInfo {
		&self.info
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use classloader_types::{declare_interface, implements};

	trait Counter {
		fn next(&mut self) -> u32;
	}

	declare_interface!(dyn Counter, "Counter");

	#[derive(Default)]
	struct FromZero(u32);

	impl Counter for FromZero {
		fn next(&mut self) -> u32 {
			self.0 += 1;
			self.0
		}
	}

	implements!(FromZero => dyn Counter);

	#[test]
	fn test_descriptor_records_metadata() {
		let descriptor = FactoryDescriptor::<dyn Counter>::new::<FromZero>(
			"FromZero",
			"Counter",
			Some("counters"),
		);

		let info = descriptor.info();
		assert_eq!(info.class_name, "FromZero");
		assert_eq!(info.base_class_name, "Counter");
		assert_eq!(info.interface, InterfaceId::new("Counter"));
		assert_eq!(info.library.as_deref(), Some("counters"));
	}

	#[test]
	fn test_each_create_is_independent() {
		let descriptor = FactoryDescriptor::<dyn Counter>::new::<FromZero>("FromZero", "Counter", None);

		let mut first = descriptor.create();
		let mut second = descriptor.create();
		assert_eq!(first.next(), 1);
		assert_eq!(first.next(), 2);
		assert_eq!(second.next(), 1);
	}

	#[test]
	fn test_erased_view_downcasts_to_its_interface() {
		let descriptor = FactoryDescriptor::<dyn Counter>::new::<FromZero>("FromZero", "Counter", None);
		let erased: &dyn ErasedDescriptor = &descriptor;

		assert!(erased
			.as_any()
			.downcast_ref::<FactoryDescriptor<dyn Counter>>()
			.is_some());
		assert_eq!(erased.info().class_name, "FromZero");
	}
}
