//! Zeit-Konstanten der Steuerlogik
//!
//! Hardware-Zuordnungen (Pins, Frequenzen) liegen in esp-firmware/src/config.rs.

/// Leuchtdauer einer LED-Phase in Millisekunden
pub const LED_PHASE_MS: u64 = 500;

/// Dauer eines Pieptons in Millisekunden
pub const BEEP_DURATION_MS: u64 = 300;

/// Periode eines Piep-Zyklus (Ton + Pause) in Millisekunden
pub const BEEP_PERIOD_MS: u64 = 1000;

/// Poll-Intervall des Buzzer-Tasks im stummen Zustand
pub const SILENT_POLL_MS: u64 = 10;

/// Poll-Intervall des Button-Tasks (ein Sample pro Fenster)
pub const BUTTON_POLL_MS: u64 = 100;

/// Kapazität des Command-Channels (Button → Buzzer)
pub const COMMAND_QUEUE_CAPACITY: usize = 5;

/// Piep-Muster des Buzzers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepPattern {
    pub on_ms: u64,
    pub period_ms: u64,
    pub silent_poll_ms: u64,
}

impl BeepPattern {
    pub const fn new(on_ms: u64, period_ms: u64, silent_poll_ms: u64) -> Self {
        Self {
            on_ms,
            period_ms,
            silent_poll_ms,
        }
    }

    /// Pausendauer nach dem Ton (Periode − Tondauer)
    pub fn off_ms(&self) -> u64 {
        self.period_ms.saturating_sub(self.on_ms)
    }
}

impl Default for BeepPattern {
    fn default() -> Self {
        Self::new(BEEP_DURATION_MS, BEEP_PERIOD_MS, SILENT_POLL_MS)
    }
}
