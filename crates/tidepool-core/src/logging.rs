//! Logging facilities for Tidepool.
//!
//! Tidepool uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter directives
//! to select individual subsystems, e.g.
//! `RUST_LOG=tidepool_core::signal=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "tidepool_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tidepool_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "tidepool_core::property";
}
