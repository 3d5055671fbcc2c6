//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Output uses the compact format without the crate/module prefix (`with_target(false)`);
//! entity-level events carry an `entity_type` field instead.
//! Verbosity is controlled by the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Order transitions**: `Updated` / `Removed` at info; misses and
//!   unsupported states are no-ops and only show at debug
//! - **Joiner calls**: a `log` span with `min_level` and the record count
//! - **Sink failures**: the error text at warn
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show actions, payloads and no-op reasons
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=record_recipe::order_list=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
