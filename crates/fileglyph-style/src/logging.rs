//! Logging facilities for Fileglyph.
//!
//! Fileglyph uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("fileglyph=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Rule synthesis and bucket insertion.
    pub const RULES: &str = "fileglyph::rules";
    /// Theme document decoding.
    pub const DECODE: &str = "fileglyph::decode";
    /// Theme attach/detach and hook installation.
    pub const LIFECYCLE: &str = "fileglyph::lifecycle";
    /// Theme registry and active theme selection.
    pub const REGISTRY: &str = "fileglyph::registry";
    /// Settings persistence.
    pub const SETTINGS: &str = "fileglyph::settings";
}
