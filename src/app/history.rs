//! Begrenzte Historie aller angewendeten Commands samt Folgezuständen.

use super::GestureCommand;
use crate::core::{OrbitState, OrbitViewport};

/// Ein angewendeter Command und der daraus entstandene Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry<V = OrbitViewport> {
    pub command: GestureCommand,
    pub state: OrbitState<V>,
}

/// Speichert Commands in Reihenfolge, ausgehend von einem Basis-Zustand.
///
/// Ist die Tiefe erreicht, wird die ältere Hälfte verworfen und die Basis auf
/// den letzten verworfenen Zustand vorgezogen. `base` + `commands()` ergibt
/// damit immer wieder `last_state()`.
#[derive(Debug, Clone)]
pub struct StateHistory<V = OrbitViewport> {
    base: OrbitState<V>,
    entries: Vec<HistoryEntry<V>>,
    max_depth: usize,
}

impl<V> StateHistory<V> {
    /// Erstellt eine leere Historie mit maximaler Tiefe (mindestens 1).
    pub fn new(base: OrbitState<V>, max_depth: usize) -> Self {
        Self {
            base,
            entries: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Fügt einen angewendeten Command hinzu.
    pub fn record(&mut self, command: GestureCommand, state: OrbitState<V>) {
        if self.entries.len() >= self.max_depth {
            let keep_from = (self.max_depth / 2).max(1);
            if let Some(dropped) = self.entries.drain(..keep_from).last() {
                self.base = dropped.state;
            }
        }
        self.entries.push(HistoryEntry { command, state });
    }

    /// Gibt die Anzahl der gespeicherten Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[HistoryEntry<V>] {
        &self.entries
    }

    /// Zustand vor dem ältesten gespeicherten Command.
    pub fn base(&self) -> &OrbitState<V> {
        &self.base
    }

    /// Zustand nach dem jüngsten Command (oder die Basis, falls leer).
    pub fn last_state(&self) -> &OrbitState<V> {
        self.entries
            .last()
            .map(|entry| &entry.state)
            .unwrap_or(&self.base)
    }

    /// Iteriert über alle gespeicherten Commands in Reihenfolge.
    pub fn commands(&self) -> impl Iterator<Item = &GestureCommand> + '_ {
        self.entries.iter().map(|entry| &entry.command)
    }
}
