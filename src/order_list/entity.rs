//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that lets [`Order`] be transitioned by the generic [`crate::framework::apply_action`].
//!
//! See the trait implementation on [`Order`] for the transition rules.

use crate::framework::{Disposition, Entity};
use crate::model::{Order, OrderId, OrderState};

impl Entity for Order {
    type Id = OrderId;
    type Action = OrderState;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Moves the order towards `target`.
    ///
    /// - `Processing`: the order's state becomes `Processing`.
    /// - `Delivered`: the order leaves the list.
    /// - anything else: rejected, the order is not touched.
    fn handle_action(&mut self, target: OrderState) -> Result<Disposition, String> {
        match target {
            OrderState::Processing => {
                self.state = OrderState::Processing;
                Ok(Disposition::Keep)
            }
            OrderState::Delivered => Ok(Disposition::Remove),
            other => Err(other.to_string()),
        }
    }
}
