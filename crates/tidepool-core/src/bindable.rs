//! Bindable entities: per-field change notification.
//!
//! [`Bindable`] is the capability implemented by data entities whose simple
//! fields a presentation layer can bind to. An entity owns one
//! `Signal<&'static str>`; the payload is the name of the field that changed.
//!
//! The invariant is that an entity notifies only for attributes it owns
//! itself. Collection membership changes are reported by the collection's own
//! signals, never through `property_changed`.

use crate::property::Property;
use crate::signal::Signal;

/// Change-notification capability for entities with bindable fields.
///
/// Implementors provide the per-entity change signal; the trait supplies the
/// two notification paths:
///
/// - [`set_property`](Bindable::set_property) assigns through a
///   [`Property`] and emits only when the value actually changed, and
/// - [`notify_property`](Bindable::notify_property) emits unconditionally,
///   for fields whose underlying representation is replaced without a
///   comparable assignment (e.g. a lazily resolved image reference).
///
/// # Example
///
/// ```
/// use tidepool_core::{Bindable, Property, Signal};
///
/// struct Species {
///     name: Property<String>,
///     property_changed: Signal<&'static str>,
/// }
///
/// impl Bindable for Species {
///     fn property_changed(&self) -> &Signal<&'static str> {
///         &self.property_changed
///     }
/// }
///
/// let species = Species {
///     name: Property::new("Yellow Tang".to_string()),
///     property_changed: Signal::new(),
/// };
///
/// species.property_changed().connect(|&field| {
///     println!("{field} changed");
/// });
///
/// species.set_property(&species.name, "Hawkfish".to_string(), "name");
/// ```
pub trait Bindable {
    /// The entity's change signal. The emitted value is the field name.
    fn property_changed(&self) -> &Signal<&'static str>;

    /// Assign `value` to `field`; emit `name` if the value changed.
    ///
    /// Returns `true` when a change was made (and notified), `false` when
    /// the new value compared equal and nothing happened.
    fn set_property<T>(&self, field: &Property<T>, value: T, name: &'static str) -> bool
    where
        T: Clone + PartialEq,
    {
        if field.set(value) {
            self.property_changed().emit(name);
            true
        } else {
            false
        }
    }

    /// Emit a change notification for `name` unconditionally.
    fn notify_property(&self, name: &'static str) {
        self.property_changed().emit(name);
    }
}
