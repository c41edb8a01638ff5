//! Configuration data types.

mod button;
mod mode;

pub use button::{ButtonEntry, CommandSpec};
pub use mode::{Mode, SwitchDirection};
