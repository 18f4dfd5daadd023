//! Logging targets for the data layer.
//!
//! See `tidepool_core::logging` for how to install a subscriber. These
//! constants select data-layer subsystems in `tracing` filter directives,
//! e.g. `RUST_LOG=tidepool::catalog=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Entity and collection model target.
    pub const MODEL: &str = "tidepool::model";
    /// Catalog registry target.
    pub const CATALOG: &str = "tidepool::catalog";
    /// Image reference resolution target.
    pub const IMAGE: &str = "tidepool::image";
}
