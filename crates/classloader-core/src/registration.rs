//! Declarative self-registration.
//!
//! [`register_class!`] records a [`Registration`] next to the type it
//! describes, with no call site to maintain. Recording has no effect on any
//! registry by itself: a composition root applies the recorded entries with
//! [`LibraryManager::install_collected`] during its registration phase, so
//! every registration happens before the first lookup no matter how the
//! binary was linked.
//!
//! [`register_class!`]: crate::register_class

use crate::{FactoryDescriptor, LibraryManager, RegisterOutcome};
use classloader_types::{BaseInterface, Implements, InterfaceId};

/// A recorded (concrete type, base interface) registration.
pub struct Registration {
	class_name: &'static str,
	interface: InterfaceId,
	library: &'static str,
	install: fn(&LibraryManager, &Registration) -> RegisterOutcome,
}

fn install<C, B>(manager: &LibraryManager, registration: &Registration) -> RegisterOutcome
where
	B: ?Sized + BaseInterface,
	C: Implements<B> + Default,
{
	manager.insert(FactoryDescriptor::<B>::new::<C>(
		registration.class_name,
		B::ID.as_str(),
		Some(registration.library),
	))
}

impl Registration {
	/// Records concrete type `C` under interface `B`.
	///
	/// `library` names the component the class comes from; the macro passes
	/// the registering crate's package name.
	pub const fn new<C, B>(class_name: &'static str, library: &'static str) -> Self
	where
		B: ?Sized + BaseInterface,
		C: Implements<B> + Default,
	{
		Self {
			class_name,
			interface: B::ID,
			library,
			install: install::<C, B>,
		}
	}

	pub fn class_name(&self) -> &'static str {
		self.class_name
	}

	pub fn interface(&self) -> InterfaceId {
		self.interface
	}

	pub fn library(&self) -> &'static str {
		self.library
	}

	/// Applies this registration to `manager`.
	pub fn install(&self, manager: &LibraryManager) -> RegisterOutcome {
		(self.install)(manager, self)
	}
}

impl std::fmt::Debug for Registration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registration")
			.field("class_name", &self.class_name)
			.field("interface", &self.interface)
			.field("library", &self.library)
			.finish()
	}
}

inventory::collect!(Registration);

/// Every registration recorded in the binary.
///
/// Sorted by library, interface and class name. Link order says nothing
/// useful, so the sort is what makes "first registration wins" repeatable.
pub fn collected() -> Vec<&'static Registration> {
	let mut registrations: Vec<_> = inventory::iter::<Registration>.into_iter().collect();
	registrations.sort_by_key(|r| (r.library, r.interface, r.class_name));
	registrations
}

/// Records a class registration to be applied by the composition root.
///
/// ```ignore
/// register_class!(Base64Codec => dyn Codec);
/// register_class!(Base64Codec => dyn Codec, "base64");
/// ```
///
/// Without an explicit name the class is registered under the stringified
/// concrete type.
#[macro_export]
macro_rules! register_class {
	($concrete:ty => $iface:ty, $name:expr) => {
		$crate::inventory::submit! {
			$crate::Registration::new::<$concrete, $iface>($name, env!("CARGO_PKG_NAME"))
		}
	};
	($concrete:ty => $iface:ty) => {
		$crate::register_class!($concrete => $iface, stringify!($concrete));
	};
}
