//! LED-Sequenzer: Rot → Grün → Blau → Rot
//!
//! Jede Phase besteht aus "Leitung an", Wartezeit, "Leitung aus".
//! Die Wartezeit selbst gehört dem Task (async Timer), der Sequenzer
//! kennt nur die Schritte davor und danach.

use crate::traits::LedLines;
use crate::types::{LedLevels, LedPhase};

/// Zyklischer LED-Sequenzer
///
/// Die Position im Zyklus bleibt über Suspend/Resume erhalten, weil der
/// pausierte Task einfach nicht weiterläuft. Der Sequenzer selbst weiß
/// nichts vom Suspend-Zustand.
pub struct LedSequencer<L: LedLines> {
    leds: L,
    phase: LedPhase,
    levels: LedLevels,
    phase_ms: u64,
}

impl<L: LedLines> LedSequencer<L> {
    /// Erstellt den Sequenzer, alle Leitungen Low, Start bei Rot
    pub fn new(mut leds: L, phase_ms: u64) -> Self {
        for phase in LedPhase::ALL {
            leds.set_level(phase, false);
        }
        Self {
            leds,
            phase: LedPhase::Red,
            levels: LedLevels::new(false, false, false),
            phase_ms,
        }
    }

    /// Schaltet die Leitung der aktuellen Phase ein
    ///
    /// Gibt die Haltezeit in Millisekunden zurück.
    pub fn begin_phase(&mut self) -> u64 {
        self.drive(self.phase, true);
        self.phase_ms
    }

    /// Schaltet die aktuelle Leitung aus und rückt zur nächsten Phase vor
    pub fn end_phase(&mut self) {
        self.drive(self.phase, false);
        self.phase = self.phase.next();
    }

    pub fn phase(&self) -> LedPhase {
        self.phase
    }

    pub fn levels(&self) -> LedLevels {
        self.levels
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    fn drive(&mut self, phase: LedPhase, high: bool) {
        match phase {
            LedPhase::Red => self.levels.r = high,
            LedPhase::Green => self.levels.g = high,
            LedPhase::Blue => self.levels.b = high,
        }
        self.leds.set_level(phase, high);
    }
}
