//! The process-wide registry of groups.

use std::sync::{Arc, OnceLock};

use crate::content;
use crate::error::{CatalogError, Result};
use crate::model::{Group, Item};

/// The only selector accepted by [`Catalog::groups`].
pub const ALL_GROUPS: &str = "AllGroups";

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The immutable registry of all [`Group`]s and their [`Item`]s.
///
/// The process-wide instance is built eagerly on first access from the
/// embedded sample content and never changes afterwards: single-phase
/// init-then-immutable, with `OnceLock` guaranteeing exactly one build even
/// if first access were to race.
///
/// # Example
///
/// ```
/// use tidepool::Catalog;
///
/// let catalog = Catalog::instance();
/// let groups = catalog.groups(tidepool::ALL_GROUPS).unwrap();
/// assert!(!groups.is_empty());
/// ```
pub struct Catalog {
    groups: Vec<Arc<Group>>,
}

impl Catalog {
    /// Returns the process-wide catalog, building it on first access.
    pub fn instance() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            tracing::info!(
                target: crate::logging::targets::CATALOG,
                "building catalog from embedded content"
            );
            content::build_catalog()
        })
    }

    /// Creates a catalog from an explicit set of groups.
    ///
    /// The bundled application only ever uses [`instance`](Self::instance);
    /// this constructor exists for tests and alternate content sets.
    pub fn with_groups(groups: Vec<Arc<Group>>) -> Self {
        Self { groups }
    }

    /// Returns all groups, in insertion order.
    ///
    /// The only supported selector is the [`ALL_GROUPS`] sentinel; any other
    /// value is a programmer error and yields
    /// [`CatalogError::UnsupportedSelector`].
    pub fn groups(&self, selector: &str) -> Result<&[Arc<Group>]> {
        if selector != ALL_GROUPS {
            return Err(CatalogError::UnsupportedSelector(selector.to_string()));
        }
        Ok(&self.groups)
    }

    /// Looks up a group by key.
    ///
    /// Returns the group only when exactly one match exists; zero matches
    /// and duplicate keys both yield `None`.
    pub fn group(&self, unique_id: &str) -> Option<Arc<Group>> {
        let mut matches = self
            .groups
            .iter()
            .filter(|group| group.unique_id() == unique_id);
        match (matches.next(), matches.next()) {
            (Some(group), None) => Some(group.clone()),
            _ => None,
        }
    }

    /// Looks up an item by key, scanning every group's full item list.
    ///
    /// Same exactly-one-or-`None` contract as [`group`](Self::group). Linear
    /// search is acceptable for a sample data set of this size.
    pub fn item(&self, unique_id: &str) -> Option<Arc<Item>> {
        let mut matches = self.groups.iter().flat_map(|group| {
            group
                .items()
                .items()
                .iter()
                .filter(|item| item.unique_id() == unique_id)
                .cloned()
                .collect::<Vec<_>>()
        });
        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item),
            _ => None,
        }
    }
}
