//! Table system: slots and the layout of cards in play.
//!
//! ## Key Types
//!
//! - `Slot`: `Empty` or `Occupied(TableCard)`
//! - `TableCard`: a card plus its `selected` / `matched` flags
//! - `Table`: the slot list, with fill-empty-first placement

pub mod layout;
pub mod slot;

pub use layout::{SlotList, Table};
pub use slot::{Slot, TableCard};
