//! The leaf content record of the catalog.

use std::sync::Arc;

use tidepool_core::{Bindable, Property, Signal};

use super::image::{ImageHandle, ImageSource};

/// A single content entry: one tile in the hub grid.
///
/// Items are created once when the catalog is built and identified by a
/// string key that is unique across the whole catalog. Descriptive fields
/// are bindable: each setter emits the item's `property_changed` signal when
/// the value actually changes. The back-reference to the owning group is a
/// plain identifier, not a live reference; groups own their items.
pub struct Item {
    unique_id: String,
    title: Property<String>,
    subtitle: Property<String>,
    description: Property<String>,
    content: Property<String>,
    image: ImageSource,
    col_span: Property<u32>,
    row_span: Property<u32>,
    group_id: Property<Option<String>>,
    property_changed: Signal<&'static str>,
}

impl Item {
    /// Creates a new item.
    ///
    /// `col_span` and `row_span` control how many grid cells the item's tile
    /// occupies and must be positive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        col_span: u32,
        row_span: u32,
        group_id: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            unique_id: unique_id.into(),
            title: Property::new(title.into()),
            subtitle: Property::new(subtitle.into()),
            description: Property::new(description.into()),
            content: Property::new(content.into()),
            image: ImageSource::from_path(image_path.into()),
            col_span: Property::new(col_span),
            row_span: Property::new(row_span),
            group_id: Property::new(Some(group_id.into())),
            property_changed: Signal::new(),
        })
    }

    /// The catalog-wide unique key of this item.
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

    /// The item's body text, shown in the detail view.
    pub fn content(&self) -> String {
        self.content.get()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.set_property(&self.content, content.into(), "content");
    }

    /// The item's image reference. Resolution happens lazily on first read.
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Points the image reference at a new unresolved asset path.
    ///
    /// The cached handle, if any, is dropped and the change is notified
    /// unconditionally.
    pub fn set_image_path(&self, path: impl Into<String>) {
        self.image.set_path(path);
        self.notify_property("image");
    }

    /// Replaces the image reference with an already resolved handle.
    pub fn set_image_handle(&self, handle: Arc<ImageHandle>) {
        self.image.set_handle(handle);
        self.notify_property("image");
    }

    /// Horizontal grid-cell span of the item's tile.
    pub fn col_span(&self) -> u32 {
        self.col_span.get()
    }

    pub fn set_col_span(&self, span: u32) {
        self.set_property(&self.col_span, span, "col_span");
    }

    /// Vertical grid-cell span of the item's tile.
    pub fn row_span(&self) -> u32 {
        self.row_span.get()
    }

    pub fn set_row_span(&self, span: u32) {
        self.set_property(&self.row_span, span, "row_span");
    }

    /// The key of the owning group, if assigned.
    pub fn group_id(&self) -> Option<String> {
        self.group_id.get()
    }

    /// Reassigns the owning group by key.
    pub fn set_group_id(&self, group_id: Option<String>) {
        self.set_property(&self.group_id, group_id, "group_id");
    }
}

impl Bindable for Item {
    fn property_changed(&self) -> &Signal<&'static str> {
        &self.property_changed
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("unique_id", &self.unique_id)
            .field("title", &self.title.get())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Item: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn sample_item() -> Arc<Item> {
        Item::new(
            "Small-Group-1-Item1",
            "Puffer Fish",
            "Puffer Fish",
            "Assets/HubPage/HubpageImage2.png",
            "One of the most unusual species of fish.",
            "The puffer fish puffs up to double its size when threatened.",
            35,
            35,
            "Group-1",
        )
    }

    #[test]
    fn test_setters_notify_field_names() {
        let item = sample_item();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let recv = changes.clone();
        item.property_changed().connect(move |&field| {
            recv.lock().push(field);
        });

        item.set_title("Pufferfish");
        item.set_row_span(41);
        item.set_title("Pufferfish"); // unchanged, no event

        assert_eq!(*changes.lock(), vec!["title", "row_span"]);
    }

    #[test]
    fn test_image_path_change_notifies_unconditionally() {
        let item = sample_item();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let recv = changes.clone();
        item.property_changed().connect(move |&field| {
            recv.lock().push(field);
        });

        item.set_image_path("Assets/HubPage/HubpageImage3.png");
        item.set_image_path("Assets/HubPage/HubpageImage3.png");

        assert_eq!(*changes.lock(), vec!["image", "image"]);
        assert!(!item.image().is_resolved());
    }

    #[test]
    fn test_group_reassignment() {
        let item = sample_item();
        assert_eq!(item.group_id().as_deref(), Some("Group-1"));

        item.set_group_id(Some("Group-2".to_string()));
        assert_eq!(item.group_id().as_deref(), Some("Group-2"));
    }
}
