//! Error types for the Tidepool data layer.

use std::fmt;

/// Errors produced by the catalog registry.
///
/// Absence is not an error in this layer: the lookup operations signal a
/// missing group or item by returning `None`. The only failure condition is
/// a contract violation on the selector argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `Catalog::groups` was called with a selector other than the
    /// supported sentinel.
    UnsupportedSelector(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSelector(selector) => {
                write!(
                    f,
                    "unsupported group selector {selector:?}: only \"AllGroups\" is supported"
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for Tidepool data-layer operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
