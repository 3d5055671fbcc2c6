//! # Core Entity Framework
//!
//! This module defines the generic building blocks for keyed entity lists.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all list elements must implement.
//! - [`Disposition`]: What happens to an entity after an action ran.
//! - [`apply_action`]: The find-and-update-or-remove engine.
//! - [`FrameworkError`]: Common errors (e.g., NotFound, Rejected).

use std::fmt::{Debug, Display};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Actions)
// =============================================================================

/// Trait that any keyed entity must implement to be managed by [`apply_action`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that list elements satisfy, the lookup,
/// update and removal logic is written *once* and reused for every entity type.
///
/// Associated types keep the pairing honest: an `Order` only accepts its own
/// `Action` type, so a payload meant for another entity can't be applied to it.
pub trait Entity: Debug {
    /// The identifier for this entity (e.g., `OrderId`, `String`, `u64`).
    /// Identifiers are expected to be unique within a single list.
    type Id: PartialEq + Display + Debug;

    /// The request applied to a matched entity (e.g., a target `OrderState`).
    type Action: Debug;

    fn id(&self) -> &Self::Id;

    /// Handle an action on the matched entity.
    ///
    /// Returning `Err` must leave `self` untouched.
    fn handle_action(&mut self, action: Self::Action) -> Result<Disposition, String>;
}

/// Outcome of [`Entity::handle_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The entity stays at its position (possibly modified).
    Keep,
    /// The entity is dropped from the list.
    Remove,
}

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors that can occur within the entity framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Action rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 3. THE GENERIC OPERATIONS
// =============================================================================

fn entity_type<T>() -> &'static str {
    // Extract just the type name (e.g., "Order" instead of "record_recipe::model::order::Order")
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

/// Position of the first entity whose id equals `id`.
pub fn find_index<T: Entity>(items: &[T], id: &T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// First entity whose id equals `id`.
pub fn get<'a, T: Entity>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    find_index(items, id).map(|index| &items[index])
}

/// Finds the first entity with `id` and applies `action` to it.
///
/// On [`Disposition::Remove`] the entity is taken out of `items`; every other
/// element keeps its relative order. On error the list is left as it was.
pub fn apply_action<T: Entity>(
    items: &mut Vec<T>,
    id: &T::Id,
    action: T::Action,
) -> Result<Disposition, FrameworkError> {
    let entity_type = entity_type::<T>();
    debug!(entity_type, %id, ?action, "Action");

    let Some(index) = find_index(items, id) else {
        debug!(entity_type, %id, "Not found");
        return Err(FrameworkError::NotFound(id.to_string()));
    };

    match items[index].handle_action(action) {
        Ok(Disposition::Keep) => {
            info!(entity_type, %id, "Updated");
            Ok(Disposition::Keep)
        }
        Ok(Disposition::Remove) => {
            items.remove(index);
            info!(entity_type, %id, size = items.len(), "Removed");
            Ok(Disposition::Remove)
        }
        Err(e) => {
            debug!(entity_type, %id, error = %e, "Action rejected");
            Err(FrameworkError::Rejected(e))
        }
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        key: String,
        votes: u32,
        open: bool,
    }

    #[derive(Debug)]
    enum TicketAction {
        Upvote,
        Close,
        Reopen,
    }

    impl Ticket {
        fn open(key: &str) -> Self {
            Self {
                key: key.into(),
                votes: 0,
                open: true,
            }
        }
    }

    impl Entity for Ticket {
        type Id = String;
        type Action = TicketAction;

        fn id(&self) -> &String {
            &self.key
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<Disposition, String> {
            match action {
                TicketAction::Upvote => {
                    self.votes += 1;
                    Ok(Disposition::Keep)
                }
                TicketAction::Close => Ok(Disposition::Remove),
                TicketAction::Reopen if self.open => Err(format!("{} is already open", self.key)),
                TicketAction::Reopen => {
                    self.open = true;
                    Ok(Disposition::Keep)
                }
            }
        }
    }

    // --- Tests ---

    #[test]
    fn test_apply_action_keep_and_remove() {
        let mut tickets = vec![Ticket::open("a"), Ticket::open("b"), Ticket::open("c")];

        // 1. Keep: entity is modified in place
        let outcome = apply_action(&mut tickets, &"b".to_string(), TicketAction::Upvote).unwrap();
        assert_eq!(outcome, Disposition::Keep);
        assert_eq!(get(&tickets, &"b".to_string()).unwrap().votes, 1);

        // 2. Remove: remaining order preserved
        let outcome = apply_action(&mut tickets, &"a".to_string(), TicketAction::Close).unwrap();
        assert_eq!(outcome, Disposition::Remove);
        let keys: Vec<_> = tickets.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn test_apply_action_not_found_leaves_list() {
        let mut tickets = vec![Ticket::open("a")];
        let before = tickets.clone();

        let err = apply_action(&mut tickets, &"zzz".to_string(), TicketAction::Close).unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("zzz".into()));
        assert_eq!(tickets, before);
    }

    #[test]
    fn test_apply_action_rejected_leaves_list() {
        let mut tickets = vec![Ticket::open("a")];
        let before = tickets.clone();

        let err = apply_action(&mut tickets, &"a".to_string(), TicketAction::Reopen).unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
        assert_eq!(tickets, before);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let mut tickets = vec![Ticket::open("dup"), Ticket::open("dup")];
        apply_action(&mut tickets, &"dup".to_string(), TicketAction::Upvote).unwrap();
        assert_eq!(tickets[0].votes, 1);
        assert_eq!(tickets[1].votes, 0);
        assert_eq!(find_index(&tickets, &"dup".to_string()), Some(0));
    }
}
