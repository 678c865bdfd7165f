pub mod apdu;

// Re-export so callers can use `crate::card::operations::exchange(...)`.
pub use apdu::{exchange, release};
