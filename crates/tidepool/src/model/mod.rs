//! The content data model.
//!
//! Two entity types make up the catalog: [`Group`] and [`Item`]. Both are
//! bindable (field changes are announced on a per-entity signal) and both
//! carry a lazily resolved [`ImageSource`].
//!
//! Collections are [`ObservableList`]s, which announce structural edits
//! through [`ListSignals`]. A [`TopWindow`] subscribes to those edits to
//! maintain a capped mirror of a list's prefix; groups use one to expose
//! their `top_items` view.

mod group;
mod image;
mod item;
mod observable_list;
mod window;

pub use group::Group;
pub use image::{BASE_LOCATION, ImageHandle, ImageSource};
pub use item::Item;
pub use observable_list::{ListSignals, ObservableList};
pub use window::TopWindow;
