//! Lazily resolved image references.
//!
//! Entities carry either an unresolved asset path or a resolved image
//! handle, never both. Resolution is strictly lazy: the handle is
//! constructed on first read by joining the fixed base location with the
//! path, then cached until a new path or handle is assigned.

use std::sync::Arc;

use parking_lot::RwLock;

/// Base location prepended to unresolved asset paths.
pub const BASE_LOCATION: &str = "app:///";

/// A resolved, displayable image handle.
///
/// Construction only computes the absolute location; decoding pixels is the
/// presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    location: String,
}

impl ImageHandle {
    /// Creates a handle for an absolute location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Creates a handle by joining [`BASE_LOCATION`] with an asset path.
    pub fn from_asset_path(path: &str) -> Self {
        Self {
            location: format!("{BASE_LOCATION}{path}"),
        }
    }

    /// The absolute location of the image.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Either an unresolved asset path or a cached resolved handle.
struct ImageSlot {
    path: Option<String>,
    handle: Option<Arc<ImageHandle>>,
}

/// An image reference with lazy path-to-handle resolution.
///
/// Setting a path drops any cached handle; setting a handle drops the path.
/// The handle is only ever constructed inside [`handle`](Self::handle), so
/// repeated path assignments without an intervening read never resolve.
///
/// # Example
///
/// ```
/// use tidepool::model::ImageSource;
///
/// let image = ImageSource::from_path("Assets/DarkGray.png");
/// assert!(!image.is_resolved());
///
/// let handle = image.handle().unwrap();
/// assert_eq!(handle.location(), "app:///Assets/DarkGray.png");
/// assert!(image.is_resolved());
/// ```
pub struct ImageSource {
    slot: RwLock<ImageSlot>,
}

impl ImageSource {
    /// Creates a reference with neither path nor handle.
    pub fn empty() -> Self {
        Self {
            slot: RwLock::new(ImageSlot {
                path: None,
                handle: None,
            }),
        }
    }

    /// Creates an unresolved reference to an asset path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(ImageSlot {
                path: Some(path.into()),
                handle: None,
            }),
        }
    }

    /// Sets a new unresolved path, invalidating any cached handle.
    ///
    /// The owning entity should follow this with an unconditional change
    /// notification; there is no comparable previous value to test against.
    pub fn set_path(&self, path: impl Into<String>) {
        let mut slot = self.slot.write();
        slot.handle = None;
        slot.path = Some(path.into());
    }

    /// Sets an already resolved handle, clearing the path.
    pub fn set_handle(&self, handle: Arc<ImageHandle>) {
        let mut slot = self.slot.write();
        slot.path = None;
        slot.handle = Some(handle);
    }

    /// Returns the resolved handle, constructing and caching it on demand.
    ///
    /// Returns `None` when neither a path nor a handle has been set.
    pub fn handle(&self) -> Option<Arc<ImageHandle>> {
        {
            let slot = self.slot.read();
            if let Some(ref handle) = slot.handle {
                return Some(handle.clone());
            }
            slot.path.as_ref()?;
        }

        let mut slot = self.slot.write();
        if slot.handle.is_none() {
            if let Some(ref path) = slot.path {
                tracing::trace!(
                    target: crate::logging::targets::IMAGE,
                    path,
                    "resolving image reference"
                );
                slot.handle = Some(Arc::new(ImageHandle::from_asset_path(path)));
            }
        }
        slot.handle.clone()
    }

    /// Returns the unresolved path, if any.
    pub fn path(&self) -> Option<String> {
        self.slot.read().path.clone()
    }

    /// Whether a resolved handle is currently cached.
    pub fn is_resolved(&self) -> bool {
        self.slot.read().handle.is_some()
    }
}

static_assertions::assert_impl_all!(ImageSource: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_lazy() {
        let image = ImageSource::from_path("Assets/HubPage/HubpageImage2.png");
        assert!(!image.is_resolved());

        // Re-assigning the path without reading never constructs a handle.
        image.set_path("Assets/HubPage/HubpageImage3.png");
        image.set_path("Assets/HubPage/HubpageImage4.png");
        assert!(!image.is_resolved());
    }

    #[test]
    fn test_read_resolves_and_caches() {
        let image = ImageSource::from_path("Assets/DarkGray.png");

        let first = image.handle().unwrap();
        assert_eq!(first.location(), "app:///Assets/DarkGray.png");
        assert!(image.is_resolved());

        // The cached handle is returned on subsequent reads.
        let second = image.handle().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_new_path_invalidates_cache() {
        let image = ImageSource::from_path("Assets/A.png");
        image.handle();
        assert!(image.is_resolved());

        image.set_path("Assets/B.png");
        assert!(!image.is_resolved());
        assert_eq!(image.handle().unwrap().location(), "app:///Assets/B.png");
    }

    #[test]
    fn test_handle_clears_path() {
        let image = ImageSource::from_path("Assets/A.png");
        image.set_handle(Arc::new(ImageHandle::new("app:///direct.png")));

        assert_eq!(image.path(), None);
        assert_eq!(image.handle().unwrap().location(), "app:///direct.png");
    }

    #[test]
    fn test_empty_reference_yields_nothing() {
        let image = ImageSource::empty();
        assert_eq!(image.handle(), None);
        assert!(!image.is_resolved());
    }
}
