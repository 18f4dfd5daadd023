//! Core reactive primitives for Tidepool.
//!
//! This crate provides the foundation the Tidepool data layer is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Reactive fields with change detection
//! - **Bindable**: The per-entity field-change notification capability
//!
//! All dispatch is synchronous and happens on the calling thread; there is no
//! event loop and no deferred delivery anywhere in this crate.
//!
//! # Signal/Slot Example
//!
//! ```
//! use tidepool_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//!
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use tidepool_core::{Property, Signal};
//!
//! // A reactive counter with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

mod bindable;
pub mod logging;
pub mod property;
pub mod signal;

pub use bindable::Bindable;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
