//! Application-Layer: Controller, Events, Historie und Use-Cases.

pub mod controller;
pub mod events;
pub mod history;
pub mod intent_mapping;
pub mod script;
pub mod use_cases;

pub use controller::OrbitController;
pub use events::{GestureCommand, GestureIntent, PointerButton};
pub use history::{HistoryEntry, StateHistory};
pub use intent_mapping::{map_intent_to_commands, DragMode, MappingContext};
pub use script::GestureScript;
pub use use_cases::camera::{apply_command, replay};
