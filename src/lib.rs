#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Record Processing Recipe
//!
//! > **Small, typed transformations over in-memory record collections.**
//!
//! This crate provides two independent components:
//! - a [`MessageJoiner`](joiner::MessageJoiner) that filters leveled log records,
//!   joins their text and forwards the result to a [`Sink`](framework::Sink);
//! - an order list updater ([`order_list::process`]) that finds an order by id and
//!   moves it to `Processing` or drops it once `Delivered`.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Typed records at the boundary
//! [`LogRecord`](model::LogRecord) and [`Order`](model::Order) are plain structs with
//! fixed field types. Deserializing a record that lacks a field fails at the boundary
//! instead of somewhere deep in a pipeline.
//!
//! ### Value semantics for updates
//! [`order_list::process`] takes the list by value and returns it. Callers keep whichever
//! binding they assign the result to; there is no second alias that may or may not
//! have been mutated. [`order_list::transition`] is the in-place, error-reporting form.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic [`Entity`](framework::Entity) lookup and
//!   [`apply_action`](framework::apply_action), plus the [`Sink`](framework::Sink) capability.
//! - **Testing**: [`MockSink`](framework::mock::MockSink) checks expected writes.
//!
//! ### 2. The Data ([`model`])
//! - **Role**: [`LogRecord`](model::LogRecord), [`Order`](model::Order),
//!   [`OrderId`](model::OrderId), [`OrderState`](model::OrderState).
//!
//! ### 3. The Components ([`joiner`], [`order_list`])
//! - **Role**: The two operations, each with its own error type.
//!
//! ### 4. Setup ([`lifecycle`])
//! - **Role**: [`setup_tracing`](lifecycle::setup_tracing) for binaries.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run tests
//! cargo test
//! ```

pub mod framework;
pub mod joiner;
pub mod lifecycle;
pub mod model;
pub mod order_list;
