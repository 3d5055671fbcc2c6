use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A state label outside the known set.
///
/// Only built by parsing, so it never holds `Placed`, `Processing` or `Delivered`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownState(String);

impl UnknownState {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lifecycle label of an order.
///
/// Labels outside the known set are kept verbatim in [`OrderState::Other`].
/// Each label has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderState {
    Placed,
    Processing,
    Delivered,
    Other(UnknownState),
}

impl OrderState {
    pub fn as_str(&self) -> &str {
        match self {
            OrderState::Placed => "Placed",
            OrderState::Processing => "Processing",
            OrderState::Delivered => "Delivered",
            OrderState::Other(label) => label.as_str(),
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Placed" => OrderState::Placed,
            "Processing" => OrderState::Processing,
            "Delivered" => OrderState::Delivered,
            other => OrderState::Other(UnknownState(other.to_string())),
        })
    }
}

impl From<String> for OrderState {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for OrderState {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<OrderState> for String {
    fn from(state: OrderState) -> Self {
        match state {
            OrderState::Other(label) => label.0,
            known => known.as_str().to_string(),
        }
    }
}

/// Represents a customer order tracked in an order list.
///
/// # Entity Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be looked up and transitioned by [`apply_action`](crate::framework::apply_action).
///
/// See [`impl Entity for Order`](#impl-Entity-for-Order) for the transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub state: OrderState,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the list the order lives in
    /// * `state` - Current lifecycle label
    pub fn new(id: OrderId, state: impl Into<OrderState>) -> Self {
        Self {
            id,
            state: state.into(),
        }
    }

    /// Creates an order in the `Placed` state.
    pub fn placed(id: OrderId) -> Self {
        Self::new(id, OrderState::Placed)
    }
}
