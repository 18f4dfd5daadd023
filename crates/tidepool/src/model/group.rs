//! Groups: ordered collections of items with a capped top-items mirror.

use std::sync::Arc;

use tidepool_core::{Bindable, Property, Signal};

use super::image::ImageSource;
use super::item::Item;
use super::observable_list::ObservableList;
use super::window::TopWindow;

/// A named collection of [`Item`]s.
///
/// A group owns two ordered sequences: the full item list, and a top-items
/// window capped at [`TOP_ITEMS_CAPACITY`](Group::TOP_ITEMS_CAPACITY)
/// elements. The window is a live mirror of the full list's prefix,
/// maintained by a [`TopWindow`]: after every mutation of the full list,
/// `top_items == items[0..min(12, items.len())]`.
///
/// The overview grid binds to the window because it will not virtualize
/// large item collections; the detail view binds to the full list.
pub struct Group {
    unique_id: String,
    title: Property<String>,
    subtitle: Property<String>,
    description: Property<String>,
    image: ImageSource,
    items: Arc<ObservableList<Arc<Item>>>,
    top_items: TopWindow<Arc<Item>>,
    property_changed: Signal<&'static str>,
}

impl Group {
    /// Maximum number of items mirrored into the top-items window.
    ///
    /// Twelve fills the overview grid's columns whether 1, 2, 3, 4, or 6
    /// rows are displayed.
    pub const TOP_ITEMS_CAPACITY: usize = 12;

    /// Creates an empty group.
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Arc<Self> {
        let items = Arc::new(ObservableList::new());
        let top_items = TopWindow::new(items.clone(), Self::TOP_ITEMS_CAPACITY);

        Arc::new(Self {
            unique_id: unique_id.into(),
            title: Property::new(title.into()),
            subtitle: Property::new(subtitle.into()),
            description: Property::new(description.into()),
            image: ImageSource::from_path(image_path.into()),
            items,
            top_items,
            property_changed: Signal::new(),
        })
    }

    /// The catalog-wide unique key of this group.
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.set_property(&self.title, title.into(), "title");
    }

    pub fn subtitle(&self) -> String {
        self.subtitle.get()
    }

    pub fn set_subtitle(&self, subtitle: impl Into<String>) {
        self.set_property(&self.subtitle, subtitle.into(), "subtitle");
    }

    pub fn description(&self) -> String {
        self.description.get()
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.set_property(&self.description, description.into(), "description");
    }

    /// The group's image reference.
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Points the image reference at a new unresolved asset path.
    pub fn set_image_path(&self, path: impl Into<String>) {
        self.image.set_path(path);
        self.notify_property("image");
    }

    /// The full, unbounded item list.
    pub fn items(&self) -> &Arc<ObservableList<Arc<Item>>> {
        &self.items
    }

    /// The capped top-items mirror of the full list's prefix.
    pub fn top_items(&self) -> &Arc<ObservableList<Arc<Item>>> {
        self.top_items.list()
    }

    /// Appends an item to the full list; the top-items window follows.
    pub fn add_item(&self, item: Arc<Item>) {
        tracing::debug!(
            target: crate::logging::targets::MODEL,
            group = self.unique_id,
            item = item.unique_id(),
            "adding item to group"
        );
        self.items.push(item);
    }

    /// Looks up an item of this group by key.
    ///
    /// Returns the item only when exactly one match exists.
    pub fn item(&self, unique_id: &str) -> Option<Arc<Item>> {
        let items = self.items.items();
        let mut matches = items.iter().filter(|item| item.unique_id() == unique_id);
        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item.clone()),
            _ => None,
        }
    }
}

impl Bindable for Group {
    fn property_changed(&self) -> &Signal<&'static str> {
        &self.property_changed
    }
}

impl std::fmt::Debug for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("unique_id", &self.unique_id)
            .field("title", &self.title.get())
            .field("items", &self.items.len())
            .field("top_items", &self.top_items.len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Group: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> Arc<Item> {
        Item::new(
            format!("Item-{n}"),
            format!("Fish {n}"),
            "",
            format!("Assets/{n}.png"),
            "",
            "",
            35,
            35,
            "Group-T",
        )
    }

    fn ids(list: &ObservableList<Arc<Item>>) -> Vec<String> {
        list.items()
            .iter()
            .map(|i| i.unique_id().to_string())
            .collect()
    }

    #[test]
    fn test_top_items_track_full_list() {
        let group = Group::new("Group-T", "Test", "", "Assets/DarkGray.png", "");

        for n in 0..15 {
            group.add_item(item(n));
        }

        assert_eq!(group.items().len(), 15);
        assert_eq!(group.top_items().len(), Group::TOP_ITEMS_CAPACITY);
        assert_eq!(
            ids(group.top_items()),
            ids(group.items())[..12].to_vec()
        );
    }

    #[test]
    fn test_small_group_mirrors_fully() {
        let group = Group::new("Group-T", "Test", "", "Assets/DarkGray.png", "");
        for n in 0..4 {
            group.add_item(item(n));
        }

        assert_eq!(ids(group.top_items()), ids(group.items()));
    }

    #[test]
    fn test_item_lookup_requires_exactly_one_match() {
        let group = Group::new("Group-T", "Test", "", "Assets/DarkGray.png", "");
        group.add_item(item(1));
        group.add_item(item(2));

        assert!(group.item("Item-1").is_some());
        assert!(group.item("Item-99").is_none());

        group.add_item(item(1)); // duplicate key
        assert!(group.item("Item-1").is_none());
    }

    #[test]
    fn test_group_fields_are_bindable() {
        use parking_lot::Mutex;

        let group = Group::new("Group-T", "Old", "", "Assets/DarkGray.png", "");
        let changes = Arc::new(Mutex::new(Vec::new()));
        let recv = changes.clone();
        group.property_changed().connect(move |&field| {
            recv.lock().push(field);
        });

        group.set_title("New");
        group.add_item(item(1)); // collection change, not a field change

        assert_eq!(*changes.lock(), vec!["title"]);
    }
}
