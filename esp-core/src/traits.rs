//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Alle Operationen gelten auf
//! dieser Ebene als unfehlbar.

use crate::types::{Button, LedPhase};

/// Trait für die drei LED-Ausgänge (Rot, Grün, Blau)
///
/// # Implementierungen
/// - **Production:** GpioLedLines (drei GPIO Outputs)
/// - **Testing:** MockLedLines (in-memory Mock)
pub trait LedLines {
    /// Setzt die Leitung der gegebenen Phase auf High (`true`) oder Low
    fn set_level(&mut self, phase: LedPhase, high: bool);
}

/// Trait für den Tongenerator des Buzzers
///
/// Frequenz und Tastverhältnis werden bei der Initialisierung fest
/// konfiguriert, hier wird nur ein- und ausgeschaltet.
pub trait ToneOutput {
    fn set_enabled(&mut self, enabled: bool);
}

/// Trait für die Taster-Eingänge
pub trait ButtonInputs {
    /// Liest den rohen Pegel am Pin (`true` = High)
    ///
    /// Die Taster sind active-low, die Invertierung passiert im ButtonMonitor.
    fn read_level(&mut self, button: Button) -> bool;
}
