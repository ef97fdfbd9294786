//! Fehler-Typen beim Systemstart
//!
//! Im Betrieb gibt es keine Fehler: volle Queue = Kommando verworfen,
//! leere Queue = kein Kommando.

use crate::types::TaskId;

/// Fataler Fehler beim Start (kein Retry, System hält an)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// Command-Channel konnte nicht angelegt werden
    ChannelUnavailable,
    /// Interrupt-Executor für den Button-Task nicht verfügbar
    ExecutorUnavailable,
    /// Tongenerator (PWM) konnte nicht konfiguriert werden
    ToneUnavailable,
    /// Task konnte nicht gestartet werden
    SpawnFailed(TaskId),
}
