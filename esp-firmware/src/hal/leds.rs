// LED-Ausgänge - drei GPIO Outputs für Rot, Grün und Blau

use esp_core::{LedLines, LedPhase};
use esp_hal::gpio::{Level, Output};

/// Real Hardware LED-Leitungen
///
/// Jede Farbe hängt an einem eigenen GPIO (active-high).
pub struct GpioLedLines {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl GpioLedLines {
    /// Übernimmt drei bereits als Output konfigurierte Pins (Startpegel Low)
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        Self { red, green, blue }
    }
}

impl LedLines for GpioLedLines {
    fn set_level(&mut self, phase: LedPhase, high: bool) {
        let line = match phase {
            LedPhase::Red => &mut self.red,
            LedPhase::Green => &mut self.green,
            LedPhase::Blue => &mut self.blue,
        };
        line.set_level(Level::from(high));
    }
}
