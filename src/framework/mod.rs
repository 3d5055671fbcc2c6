//! Generic framework for keyed entity lists and output sinks.
//!
//! This module provides the building blocks the domain components are made of.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that list elements implement to be looked up and transitioned
//! - [`apply_action`] - Generic find-and-update-or-remove over a `Vec<T: Entity>`
//! - [`Sink`] - Capability that receives finished output
//! - [`FrameworkError`], [`SinkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a sink that checks expected writes.

pub mod core;
pub mod mock;
pub mod sink;

// Re-export core types for convenience
pub use self::core::*;
pub use self::sink::*;
