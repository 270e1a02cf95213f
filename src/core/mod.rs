//! Core-Domänentypen: Viewport-Parameter, Projektion, Interaktions-Session, Kamera-Zustand.

pub mod interaction;
pub mod orbit_state;
/// Viewport-Parameter und Constraint-Anwendung
///
/// - `ViewportProps`: rohe Parameter-Tasche (alle Felder optional)
/// - `ViewportParams`: bereinigter, vollständig belegter Zustand
/// - `Bounds`: achsenparallele Szene-Ausdehnung
pub mod params;
pub mod projection;
pub mod session;

pub use interaction::InteractiveState;
pub use orbit_state::OrbitState;
pub use params::{Bounds, ViewportParams, ViewportProps};
pub use projection::{OrbitViewport, Viewport};
pub use session::InteractionSession;
