//! The registry directory.
//!
//! [`LibraryManager`] maps interface identities to per-interface registries,
//! which map class names to factory descriptors. It moves through three
//! phases: open (registrations accepted), sealed (registrations refused,
//! lookups served) and shut down (all descriptors released).

use crate::descriptor::ErasedDescriptor;
use crate::registration::{self, Registration};
use crate::{DescriptorInfo, FactoryDescriptor, LookupError, RegisterOutcome, RegistryError};
use classloader_types::{BaseInterface, Implements, InterfaceId};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Class name to descriptor map for one interface.
struct InterfaceRegistry {
	/// Rust type the interface token was first registered with.
	type_id: TypeId,
	type_name: &'static str,
	classes: HashMap<String, Box<dyn ErasedDescriptor>>,
}

impl InterfaceRegistry {
	fn new<B: ?Sized + BaseInterface>() -> Self {
		Self {
			type_id: TypeId::of::<B>(),
			type_name: type_name::<B>(),
			classes: HashMap::new(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Open,
	Sealed,
	ShutDown,
}

struct Directory {
	phase: Phase,
	interfaces: HashMap<InterfaceId, InterfaceRegistry>,
}

/// Counts from applying a batch of registrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
	pub registered: usize,
	pub duplicates: usize,
	pub rejected: usize,
}

impl InstallSummary {
	fn record(&mut self, outcome: &RegisterOutcome) {
		match outcome {
			RegisterOutcome::Registered => self.registered += 1,
			RegisterOutcome::Duplicate => self.duplicates += 1,
			RegisterOutcome::Rejected(_) => self.rejected += 1,
		}
	}
}

/// Registry of factory descriptors, keyed by interface and class name.
///
/// All access goes through one reader-writer lock: registration holds it
/// exclusively for locate-or-create, duplicate check and insert, lookups
/// hold it shared. Instances are constructed after the lock is released.
pub struct LibraryManager {
	directory: RwLock<Directory>,
	duplicate_class: AtomicBool,
}

impl Default for LibraryManager {
	fn default() -> Self {
		Self::new()
	}
}

impl LibraryManager {
	/// Creates an empty registry in the open phase.
	pub fn new() -> Self {
		Self {
			directory: RwLock::new(Directory {
				phase: Phase::Open,
				interfaces: HashMap::new(),
			}),
			duplicate_class: AtomicBool::new(false),
		}
	}

	// Every critical section leaves the directory consistent, so a panic in
	// another thread does not invalidate it.
	fn read(&self) -> RwLockReadGuard<'_, Directory> {
		self.directory.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Directory> {
		self.directory.write().unwrap_or_else(PoisonError::into_inner)
	}

	/// Registers concrete type `C` under interface `B` as `class_name`.
	///
	/// A name that is already taken for `B` leaves the existing class in
	/// place, sets the duplicate flag and returns
	/// [`RegisterOutcome::Duplicate`].
	pub fn register<C, B>(&self, class_name: &str, base_class_name: &str) -> RegisterOutcome
	where
		B: ?Sized + BaseInterface,
		C: Implements<B> + Default,
	{
		self.insert(FactoryDescriptor::<B>::new::<C>(
			class_name,
			base_class_name,
			None,
		))
	}

	/// Inserts a prepared descriptor.
	pub fn insert<B: ?Sized + BaseInterface>(&self, descriptor: FactoryDescriptor<B>) -> RegisterOutcome {
		let info = descriptor.info().clone();

		if info.class_name.is_empty() {
			tracing::warn!(interface = %B::ID, "Refusing class with empty name");
			return RegisterOutcome::Rejected(RegistryError::EmptyClassName(B::ID));
		}

		let mut directory = self.write();
		let Directory { phase, interfaces } = &mut *directory;

		match phase {
			Phase::Open => {},
			Phase::Sealed => {
				tracing::warn!(
					interface = %B::ID,
					class = %info.class_name,
					"Registry is sealed, registration ignored"
				);
				return RegisterOutcome::Rejected(RegistryError::Sealed {
					interface: B::ID,
					class: info.class_name,
				});
			},
			Phase::ShutDown => {
				tracing::warn!(
					interface = %B::ID,
					class = %info.class_name,
					"Registry is shut down, registration ignored"
				);
				return RegisterOutcome::Rejected(RegistryError::ShutDown);
			},
		}

		let registry = interfaces
			.entry(B::ID)
			.or_insert_with(InterfaceRegistry::new::<B>);

		if registry.type_id != TypeId::of::<B>() {
			tracing::error!(
				interface = %B::ID,
				bound = registry.type_name,
				claimed = type_name::<B>(),
				class = %info.class_name,
				"Interface token claimed by two different types"
			);
			return RegisterOutcome::Rejected(RegistryError::InterfaceConflict {
				interface: B::ID,
				bound: registry.type_name,
				claimed: type_name::<B>(),
			});
		}

		if let Some(existing) = registry.classes.get(&info.class_name) {
			self.duplicate_class.store(true, Ordering::SeqCst);
			tracing::warn!(
				interface = %B::ID,
				class = %info.class_name,
				existing_library = ?existing.info().library,
				library = ?info.library,
				"A class with the same name is already registered"
			);
			return RegisterOutcome::Duplicate;
		}

		registry
			.classes
			.insert(info.class_name.clone(), Box::new(descriptor));
		tracing::info!(
			interface = %B::ID,
			class = %info.class_name,
			library = ?info.library,
			"Registered class"
		);
		RegisterOutcome::Registered
	}

	/// Applies a batch of recorded registrations in iteration order.
	pub fn install<'a, I>(&self, registrations: I) -> InstallSummary
	where
		I: IntoIterator<Item = &'a Registration>,
	{
		let mut summary = InstallSummary::default();
		for registration in registrations {
			tracing::debug!(
				interface = %registration.interface(),
				class = registration.class_name(),
				library = registration.library(),
				"Applying registration"
			);
			summary.record(&registration.install(self));
		}
		summary
	}

	/// Applies every registration recorded with [`register_class!`].
	///
	/// [`register_class!`]: crate::register_class
	pub fn install_collected(&self) -> InstallSummary {
		let summary = self.install(registration::collected());
		tracing::info!(
			registered = summary.registered,
			duplicates = summary.duplicates,
			rejected = summary.rejected,
			"Installed collected registrations"
		);
		summary
	}

	/// Runs `f` with registrations attributed to `library`.
	///
	/// The library travels with the scope handle, so scopes for different
	/// libraries may run on different threads at the same time.
	pub fn with_library<R>(&self, library: &str, f: impl FnOnce(&LibraryScope<'_>) -> R) -> R {
		tracing::debug!(library, "Entering library scope");
		f(&LibraryScope {
			manager: self,
			library,
		})
	}

	/// Ends the registration phase. Later registrations are rejected.
	pub fn seal(&self) -> Result<(), RegistryError> {
		let mut directory = self.write();
		match directory.phase {
			Phase::ShutDown => Err(RegistryError::ShutDown),
			Phase::Sealed => Ok(()),
			Phase::Open => {
				directory.phase = Phase::Sealed;
				tracing::info!(
					interfaces = directory.interfaces.len(),
					classes = count_classes(&directory),
					"Registry sealed"
				);
				Ok(())
			},
		}
	}

	/// Releases every descriptor and refuses all further use.
	///
	/// Must only be called once every consumer is done with the registry.
	/// Returns the number of descriptors released; a second call fails.
	pub fn shutdown(&self) -> Result<usize, RegistryError> {
		let mut directory = self.write();
		if directory.phase == Phase::ShutDown {
			return Err(RegistryError::ShutDown);
		}
		let released = count_classes(&directory);
		directory.phase = Phase::ShutDown;
		directory.interfaces.clear();
		tracing::info!(released, "Registry shut down");
		Ok(released)
	}

	/// Creates a new instance of `class_name` through interface `B`.
	pub fn create<B: ?Sized + BaseInterface>(&self, class_name: &str) -> Result<Box<B>, LookupError> {
		let construct = self.with_descriptor::<B, _>(class_name, |d| d.constructor())?;
		Ok(construct())
	}

	/// Returns a copy of the descriptor for `class_name`, for callers that
	/// construct repeatedly without going through the registry lock.
	pub fn descriptor<B: ?Sized + BaseInterface>(
		&self,
		class_name: &str,
	) -> Result<FactoryDescriptor<B>, LookupError> {
		self.with_descriptor::<B, _>(class_name, FactoryDescriptor::clone)
	}

	fn with_descriptor<B, R>(
		&self,
		class_name: &str,
		f: impl FnOnce(&FactoryDescriptor<B>) -> R,
	) -> Result<R, LookupError>
	where
		B: ?Sized + BaseInterface,
	{
		let directory = self.read();
		if directory.phase == Phase::ShutDown {
			return Err(LookupError::ShutDown);
		}

		let registry = directory
			.interfaces
			.get(&B::ID)
			.ok_or(LookupError::UnknownInterface(B::ID))?;
		let erased = registry
			.classes
			.get(class_name)
			.ok_or_else(|| LookupError::UnknownClass {
				interface: B::ID,
				class: class_name.to_string(),
			})?;
		let descriptor = erased
			.as_any()
			.downcast_ref::<FactoryDescriptor<B>>()
			.ok_or(LookupError::InterfaceMismatch(B::ID))?;

		Ok(f(descriptor))
	}

	/// True if `class_name` is registered for interface `B`.
	pub fn contains<B: ?Sized + BaseInterface>(&self, class_name: &str) -> bool {
		self.read()
			.interfaces
			.get(&B::ID)
			.is_some_and(|registry| registry.classes.contains_key(class_name))
	}

	/// Classes registered for interface `B`, sorted by name.
	pub fn classes<B: ?Sized + BaseInterface>(&self) -> Vec<DescriptorInfo> {
		self.collect_infos(|interface, _| interface == B::ID)
	}

	/// Every registered class, sorted by interface then name.
	pub fn all_classes(&self) -> Vec<DescriptorInfo> {
		self.collect_infos(|_, _| true)
	}

	/// Classes registered from `library`, sorted by interface then name.
	pub fn classes_for_library(&self, library: &str) -> Vec<DescriptorInfo> {
		self.collect_infos(|_, info| info.library.as_deref() == Some(library))
	}

	fn collect_infos(&self, keep: impl Fn(InterfaceId, &DescriptorInfo) -> bool) -> Vec<DescriptorInfo> {
		let directory = self.read();
		let mut infos: Vec<DescriptorInfo> = directory
			.interfaces
			.iter()
			.flat_map(|(id, registry)| registry.classes.values().map(move |d| (*id, d.info())))
			.filter(|(id, info)| keep(*id, *info))
			.map(|(_, info)| info.clone())
			.collect();
		infos.sort_by(|a, b| {
			a.interface
				.cmp(&b.interface)
				.then_with(|| a.class_name.cmp(&b.class_name))
		});
		infos
	}

	/// Interfaces with at least one registration attempt, sorted.
	pub fn interfaces(&self) -> Vec<InterfaceId> {
		let mut ids: Vec<_> = self.read().interfaces.keys().copied().collect();
		ids.sort();
		ids
	}

	/// Total number of registered classes.
	pub fn len(&self) -> usize {
		count_classes(&self.read())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// True once any duplicate registration has been attempted.
	pub fn has_duplicates(&self) -> bool {
		self.duplicate_class.load(Ordering::SeqCst)
	}

	pub fn is_sealed(&self) -> bool {
		self.read().phase == Phase::Sealed
	}

	pub fn is_shut_down(&self) -> bool {
		self.read().phase == Phase::ShutDown
	}
}

fn count_classes(directory: &Directory) -> usize {
	directory
		.interfaces
		.values()
		.map(|registry| registry.classes.len())
		.sum()
}

/// Registration handle that attributes classes to one library.
pub struct LibraryScope<'a> {
	manager: &'a LibraryManager,
	library: &'a str,
}

impl LibraryScope<'_> {
	pub fn library(&self) -> &str {
		self.library
	}

	/// Like [`LibraryManager::register`], recording this scope's library.
	pub fn register<C, B>(&self, class_name: &str, base_class_name: &str) -> RegisterOutcome
	where
		B: ?Sized + BaseInterface,
		C: Implements<B> + Default,
	{
		self.manager.insert(FactoryDescriptor::<B>::new::<C>(
			class_name,
			base_class_name,
			Some(self.library),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use classloader_types::{declare_interface, implements};

	trait Greeter: Send {
		fn greet(&self) -> String;
	}

	trait Parser: Send {
		fn parse(&self, input: &str) -> usize;
	}

	declare_interface!(dyn Greeter, "Greeter");
	declare_interface!(dyn Parser, "Parser");

	#[derive(Default)]
	struct English;
	#[derive(Default)]
	struct French;
	#[derive(Default)]
	struct WordParser;

	impl Greeter for English {
		fn greet(&self) -> String {
			"hello".to_string()
		}
	}

	impl Greeter for French {
		fn greet(&self) -> String {
			"bonjour".to_string()
		}
	}

	impl Parser for WordParser {
		fn parse(&self, input: &str) -> usize {
			input.split_whitespace().count()
		}
	}

	trait Tally: Send {
		fn bump(&mut self) -> u32;
	}

	declare_interface!(dyn Tally, "Tally");

	#[derive(Default)]
	struct Clicks(u32);

	impl Tally for Clicks {
		fn bump(&mut self) -> u32 {
			self.0 += 1;
			self.0
		}
	}

	implements!(Clicks => dyn Tally);
	implements!(English => dyn Greeter);
	implements!(French => dyn Greeter);
	implements!(WordParser => dyn Parser);

	// Same token as `Greeter`, different Rust type.
	trait Impostor {}
	declare_interface!(dyn Impostor, "Greeter");
	#[derive(Default)]
	struct Fake;
	impl Impostor for Fake {}
	implements!(Fake => dyn Impostor);

	crate::register_class!(English => dyn Greeter);
	crate::register_class!(WordParser => dyn Parser, "words");
	// Two identical triggers for one pair.
	crate::register_class!(French => dyn Greeter, "bonjour");
	crate::register_class!(French => dyn Greeter, "bonjour");

	#[test]
	fn test_register_then_create() {
		let manager = LibraryManager::new();
		assert!(manager
			.register::<English, dyn Greeter>("English", "Greeter")
			.is_registered());

		let greeter = manager.create::<dyn Greeter>("English").unwrap();
		assert_eq!(greeter.greet(), "hello");
		assert!(manager.contains::<dyn Greeter>("English"));
		assert_eq!(manager.len(), 1);
	}

	#[test]
	fn test_duplicate_keeps_first_registration() {
		let manager = LibraryManager::new();
		assert!(!manager.has_duplicates());

		manager.register::<English, dyn Greeter>("Greeter", "Greeter");
		let outcome = manager.register::<French, dyn Greeter>("Greeter", "Greeter");

		assert_eq!(outcome, RegisterOutcome::Duplicate);
		assert!(manager.has_duplicates());
		assert_eq!(manager.len(), 1);
		assert_eq!(manager.create::<dyn Greeter>("Greeter").unwrap().greet(), "hello");
	}

	#[test]
	fn test_duplicate_does_not_block_later_registrations() {
		let manager = LibraryManager::new();
		manager.register::<English, dyn Greeter>("English", "Greeter");
		manager.register::<English, dyn Greeter>("English", "Greeter");

		assert!(manager
			.register::<French, dyn Greeter>("French", "Greeter")
			.is_registered());
		assert_eq!(manager.len(), 2);
	}

	#[test]
	fn test_same_name_under_different_interfaces() {
		let manager = LibraryManager::new();
		assert!(manager
			.register::<English, dyn Greeter>("default", "Greeter")
			.is_registered());
		assert!(manager
			.register::<WordParser, dyn Parser>("default", "Parser")
			.is_registered());
		assert!(!manager.has_duplicates());

		assert_eq!(manager.create::<dyn Greeter>("default").unwrap().greet(), "hello");
		assert_eq!(manager.create::<dyn Parser>("default").unwrap().parse("a b c"), 3);
	}

	#[test]
	fn test_lookup_misses() {
		let manager = LibraryManager::new();

		let err = manager.create::<dyn Greeter>("English").err().unwrap();
		assert_eq!(err, LookupError::UnknownInterface(InterfaceId::new("Greeter")));
		assert!(err.is_not_found());

		manager.register::<English, dyn Greeter>("English", "Greeter");
		let err = manager.create::<dyn Greeter>("DoesNotExist").err().unwrap();
		assert_eq!(
			err,
			LookupError::UnknownClass {
				interface: InterfaceId::new("Greeter"),
				class: "DoesNotExist".to_string(),
			}
		);
		assert!(err.is_not_found());
		assert!(!manager.contains::<dyn Parser>("English"));
	}

	#[test]
	fn test_created_instances_do_not_alias() {
		let manager = LibraryManager::new();
		manager.register::<Clicks, dyn Tally>("Clicks", "Tally");

		let mut first = manager.create::<dyn Tally>("Clicks").unwrap();
		let mut second = manager.create::<dyn Tally>("Clicks").unwrap();
		assert_eq!(first.bump(), 1);
		assert_eq!(first.bump(), 2);
		assert_eq!(second.bump(), 1);
	}

	#[test]
	fn test_empty_class_name_rejected() {
		let manager = LibraryManager::new();
		let outcome = manager.register::<English, dyn Greeter>("", "Greeter");
		assert_eq!(
			outcome,
			RegisterOutcome::Rejected(RegistryError::EmptyClassName(InterfaceId::new("Greeter")))
		);
		assert!(manager.is_empty());
	}

	#[test]
	fn test_interface_token_conflict() {
		let manager = LibraryManager::new();
		manager.register::<English, dyn Greeter>("English", "Greeter");

		let outcome = manager.register::<Fake, dyn Impostor>("Fake", "Impostor");
		assert!(matches!(
			outcome,
			RegisterOutcome::Rejected(RegistryError::InterfaceConflict { .. })
		));
		assert_eq!(manager.len(), 1);
		assert!(!manager.has_duplicates());
	}

	#[test]
	fn test_concurrent_registration() {
		const THREADS: usize = 16;
		let manager = LibraryManager::new();

		std::thread::scope(|scope| {
			for i in 0..THREADS {
				let manager = &manager;
				scope.spawn(move || {
					let name = format!("greeter-{}", i);
					manager.register::<English, dyn Greeter>(&name, "Greeter")
				});
			}
		});

		assert_eq!(manager.classes::<dyn Greeter>().len(), THREADS);
		assert!(!manager.has_duplicates());
	}

	#[test]
	fn test_concurrent_duplicates_keep_one_entry() {
		let manager = LibraryManager::new();

		let registered: usize = std::thread::scope(|scope| {
			let handles: Vec<_> = (0..8)
				.map(|_| {
					scope.spawn(|| {
						manager
							.register::<English, dyn Greeter>("shared", "Greeter")
							.is_registered()
					})
				})
				.collect();
			handles
				.into_iter()
				.map(|h| h.join().unwrap() as usize)
				.sum()
		});

		assert_eq!(registered, 1);
		assert_eq!(manager.len(), 1);
		assert!(manager.has_duplicates());
	}

	#[test]
	fn test_seal_rejects_late_registrations() {
		let manager = LibraryManager::new();
		manager.register::<English, dyn Greeter>("English", "Greeter");
		manager.seal().unwrap();
		assert!(manager.is_sealed());

		let outcome = manager.register::<French, dyn Greeter>("French", "Greeter");
		assert!(matches!(
			outcome,
			RegisterOutcome::Rejected(RegistryError::Sealed { .. })
		));
		assert!(manager.create::<dyn Greeter>("English").is_ok());
		assert!(manager.seal().is_ok());
	}

	#[test]
	fn test_shutdown_is_at_most_once() {
		let manager = LibraryManager::new();
		manager.register::<English, dyn Greeter>("English", "Greeter");
		manager.register::<WordParser, dyn Parser>("words", "Parser");

		assert_eq!(manager.shutdown(), Ok(2));
		assert!(manager.is_shut_down());
		assert_eq!(manager.shutdown(), Err(RegistryError::ShutDown));
		assert_eq!(
			manager.create::<dyn Greeter>("English").err(),
			Some(LookupError::ShutDown)
		);
		assert_eq!(manager.seal(), Err(RegistryError::ShutDown));
		assert_eq!(
			manager.register::<English, dyn Greeter>("English", "Greeter"),
			RegisterOutcome::Rejected(RegistryError::ShutDown)
		);
	}

	#[test]
	fn test_descriptor_handout() {
		let manager = LibraryManager::new();
		manager.register::<French, dyn Greeter>("French", "Greeter");

		let descriptor = manager.descriptor::<dyn Greeter>("French").unwrap();
		assert_eq!(descriptor.class_name(), "French");
		assert_eq!(descriptor.create().greet(), "bonjour");
		assert!(manager.descriptor::<dyn Greeter>("English").is_err());
	}

	#[test]
	fn test_library_scope_bookkeeping() {
		let manager = LibraryManager::new();
		manager.with_library("libgreeters.so", |scope| {
			assert_eq!(scope.library(), "libgreeters.so");
			scope.register::<English, dyn Greeter>("English", "Greeter");
			scope.register::<French, dyn Greeter>("French", "Greeter");
		});
		manager.register::<WordParser, dyn Parser>("words", "Parser");

		let names: Vec<_> = manager
			.classes_for_library("libgreeters.so")
			.into_iter()
			.map(|info| info.class_name)
			.collect();
		assert_eq!(names, vec!["English", "French"]);
		assert!(manager.classes_for_library("libother.so").is_empty());
	}

	#[test]
	fn test_listing_is_sorted() {
		let manager = LibraryManager::new();
		manager.register::<WordParser, dyn Parser>("words", "Parser");
		manager.register::<French, dyn Greeter>("French", "Greeter");
		manager.register::<English, dyn Greeter>("English", "Greeter");

		let listed: Vec<_> = manager
			.all_classes()
			.into_iter()
			.map(|info| (info.interface.as_str(), info.class_name))
			.collect();
		assert_eq!(
			listed,
			vec![
				("Greeter", "English".to_string()),
				("Greeter", "French".to_string()),
				("Parser", "words".to_string()),
			]
		);
		assert_eq!(
			manager.interfaces(),
			vec![InterfaceId::new("Greeter"), InterfaceId::new("Parser")]
		);
	}

	#[test]
	fn test_install_collected_registrations() {
		let manager = LibraryManager::new();
		let summary = manager.install_collected();

		assert_eq!(summary.registered, 3);
		assert_eq!(summary.duplicates, 1);
		assert_eq!(manager.create::<dyn Greeter>("English").unwrap().greet(), "hello");
		assert_eq!(manager.create::<dyn Parser>("words").unwrap().parse("x y"), 2);

		let info = &manager.classes::<dyn Parser>()[0];
		assert_eq!(info.library.as_deref(), Some("classloader-core"));
	}

	#[test]
	fn test_installing_twice_flags_duplicates() {
		let manager = LibraryManager::new();
		manager.install_collected();
		let summary = manager.install_collected();

		assert_eq!(summary.registered, 0);
		assert_eq!(summary.duplicates, 4);
		assert!(manager.has_duplicates());
	}

	#[test]
	fn test_identical_triggers_register_once() {
		let manager = LibraryManager::new();
		manager.install_collected();

		assert!(manager.has_duplicates());
		assert_eq!(manager.len(), 3);
		let bonjour: Vec<_> = manager
			.classes::<dyn Greeter>()
			.into_iter()
			.filter(|info| info.class_name == "bonjour")
			.collect();
		assert_eq!(bonjour.len(), 1);
		assert_eq!(manager.create::<dyn Greeter>("bonjour").unwrap().greet(), "bonjour");
	}

	#[test]
	fn test_library_scopes_on_separate_threads() {
		let manager = LibraryManager::new();

		std::thread::scope(|scope| {
			for (library, name) in [("libfirst.so", "first"), ("libsecond.so", "second")] {
				let manager = &manager;
				scope.spawn(move || {
					manager.with_library(library, |lib| {
						lib.register::<English, dyn Greeter>(name, "Greeter")
					})
				});
			}
		});

		let first = manager.classes_for_library("libfirst.so");
		let second = manager.classes_for_library("libsecond.so");
		assert_eq!(first.len(), 1);
		assert_eq!(first[0].class_name, "first");
		assert_eq!(second.len(), 1);
		assert_eq!(second[0].class_name, "second");
	}
}
