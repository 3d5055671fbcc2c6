//! Pure data structures (DTOs) consumed by the joiner and the order list updater.

pub mod log_record;
pub mod order;

pub use log_record::*;
pub use order::*;
