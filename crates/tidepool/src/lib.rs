//! Tidepool: the observable sample-content layer of a hub-style browser.
//!
//! The crate exposes a process-wide [`Catalog`] of fish-species [groups],
//! each holding an ordered list of [items]. All collections and entity
//! fields are observable: structural edits and field changes are announced
//! through synchronous signals from [`tidepool_core`], so views can stay
//! current without polling.
//!
//! The centerpiece is [`model::TopWindow`], which maintains a fixed-capacity
//! mirror of a source list's prefix by translating each structural edit into
//! the minimal edit on the mirror. Groups use it for their `top_items` view,
//! so overview surfaces bind to a list that never exceeds
//! [`model::Group::TOP_ITEMS_CAPACITY`] entries.
//!
//! [groups]: model::Group
//! [items]: model::Item
//!
//! # Example
//!
//! ```
//! use tidepool::{ALL_GROUPS, Catalog};
//!
//! let catalog = Catalog::instance();
//! for group in catalog.groups(ALL_GROUPS)? {
//!     println!("{}: {} items", group.title(), group.items().len());
//! }
//! # Ok::<(), tidepool::CatalogError>(())
//! ```

mod catalog;
mod content;
mod error;
pub mod logging;
pub mod model;

pub use catalog::{ALL_GROUPS, Catalog};
pub use error::{CatalogError, Result};
