//! Order list state transitions.
//!
//! [`process`] is the lenient entry point: missing ids and unsupported states
//! leave the list as it was. [`transition`] does the same work in place and
//! reports why nothing changed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{apply_action, Disposition};
use crate::model::{Order, OrderId, OrderState};
use tracing::{debug, instrument};

/// Applies `new_state` to the first order with `order_id` and returns the list.
///
/// - `Processing` updates that order's state in place.
/// - `Delivered` removes the order; the others keep their relative order.
/// - Unknown ids and any other state return the list unchanged.
///
/// The list is taken by value and handed back, so the caller never observes a
/// half-applied change.
#[instrument(skip(orders), fields(size = orders.len()))]
pub fn process(mut orders: Vec<Order>, order_id: &OrderId, new_state: OrderState) -> Vec<Order> {
    if let Err(e) = transition(&mut orders, order_id, new_state) {
        debug!(error = %e, "No transition applied");
    }
    orders
}

/// Strict, in-place form of [`process`].
///
/// # Errors
/// - [`OrderError::NotFound`] when no order has `order_id`.
/// - [`OrderError::UnsupportedState`] for states other than `Processing` and `Delivered`.
///
/// The list is untouched whenever an error is returned.
pub fn transition(
    orders: &mut Vec<Order>,
    order_id: &OrderId,
    new_state: OrderState,
) -> Result<Disposition, OrderError> {
    Ok(apply_action(orders, order_id, new_state)?)
}
