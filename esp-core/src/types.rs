//! Core Types für LED- und Buzzer-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB;

/// Momentaufnahme der drei LED-Leitungen (true = High)
pub type LedLevels = RGB<bool>;

/// Kommando für den Buzzer-Task
///
/// Wird vom Button-Task über den Command-Channel gesendet
/// und vom Buzzer-Task genau einmal konsumiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerCommand {
    /// Beeping ein-/ausschalten
    ToggleBeep,
    /// Buzzer stumm schalten (idempotent)
    Mute,
}

/// Betriebsmodus des Buzzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerMode {
    #[default]
    Silent,
    Beeping,
}

/// Zustandsübergang nach Anwendung eines Kommandos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerTransition {
    pub command: BuzzerCommand,
    pub from: BuzzerMode,
    pub to: BuzzerMode,
}

impl BuzzerTransition {
    /// true wenn sich der Modus tatsächlich geändert hat
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Phase der LED-Sequenz: Rot → Grün → Blau → Rot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPhase {
    #[default]
    Red,
    Green,
    Blue,
}

impl LedPhase {
    /// Alle Phasen in Zyklus-Reihenfolge
    pub const ALL: [LedPhase; 3] = [LedPhase::Red, LedPhase::Green, LedPhase::Blue];

    pub fn next(self) -> Self {
        match self {
            LedPhase::Red => LedPhase::Green,
            LedPhase::Green => LedPhase::Blue,
            LedPhase::Blue => LedPhase::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LedPhase::Red => "Rot",
            LedPhase::Green => "Grün",
            LedPhase::Blue => "Blau",
        }
    }
}

/// Die beiden Taster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Pausiert/startet die LED-Sequenz und schaltet den Buzzer stumm
    A,
    /// Schaltet das Beeping ein/aus
    B,
}

/// Kennung der drei System-Tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    LedSequencer,
    BuzzerController,
    ButtonMonitor,
}

impl TaskId {
    pub fn name(self) -> &'static str {
        match self {
            TaskId::LedSequencer => "LED_Task",
            TaskId::BuzzerController => "Buzzer_Task",
            TaskId::ButtonMonitor => "Button_Task",
        }
    }
}
