//! Orbit View Controller Library.
//! Unveränderliche Pan/Zoom-Zustandsmaschine für Kamera-Viewports.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    apply_command, replay, DragMode, GestureCommand, GestureIntent, GestureScript,
    OrbitController, PointerButton, StateHistory,
};
pub use crate::core::{
    Bounds, InteractionSession, InteractiveState, OrbitState, OrbitViewport, Viewport,
    ViewportParams, ViewportProps,
};
pub use shared::ControllerOptions;
