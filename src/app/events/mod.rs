//! GestureIntent- und GestureCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::GestureCommand;
pub use intent::{GestureIntent, PointerButton};
