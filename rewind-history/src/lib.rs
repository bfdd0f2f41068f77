pub use action::{Action, ActionId};
pub use stack::{HistoryStack, Navigation};

mod action;
mod stack;
