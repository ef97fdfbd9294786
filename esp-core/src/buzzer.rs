//! Buzzer-Zustandsautomat
//!
//! Zwei Zustände: Silent und Beeping. Der Zustand gehört allein dem
//! Buzzer-Task und wird nur durch Kommandos verändert, die er selbst
//! aus dem Channel holt.

use crate::config::BeepPattern;
use crate::traits::ToneOutput;
use crate::types::{BuzzerCommand, BuzzerMode, BuzzerTransition};

/// Was der Task in dieser Schleifen-Iteration abwarten muss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerCycle {
    /// Ton läuft: `on_ms` warten, `end_beep()`, dann `off_ms` warten
    Beep { on_ms: u64, off_ms: u64 },
    /// Stumm: kurz warten und erneut pollen
    Idle { poll_ms: u64 },
}

/// Ergebnis einer Schleifen-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerStep {
    /// Angewendetes Kommando (falls eines empfangen wurde)
    pub transition: Option<BuzzerTransition>,
    pub cycle: BuzzerCycle,
}

/// Buzzer-Controller mit Piep-Muster
pub struct BuzzerController<T: ToneOutput> {
    tone: T,
    mode: BuzzerMode,
    pattern: BeepPattern,
}

impl<T: ToneOutput> BuzzerController<T> {
    /// Startet im Zustand Silent mit abgeschaltetem Ton
    pub fn new(mut tone: T, pattern: BeepPattern) -> Self {
        tone.set_enabled(false);
        Self {
            tone,
            mode: BuzzerMode::Silent,
            pattern,
        }
    }

    /// Wendet ein Kommando an (nur Zustand, keine Ausgabe)
    pub fn apply(&mut self, command: BuzzerCommand) -> BuzzerTransition {
        let from = self.mode;
        self.mode = match (command, from) {
            (BuzzerCommand::ToggleBeep, BuzzerMode::Silent) => BuzzerMode::Beeping,
            (BuzzerCommand::ToggleBeep, BuzzerMode::Beeping) => BuzzerMode::Silent,
            (BuzzerCommand::Mute, _) => BuzzerMode::Silent,
        };
        BuzzerTransition {
            command,
            from,
            to: self.mode,
        }
    }

    /// Eine Schleifen-Iteration: höchstens ein Kommando, dann Ausgang
    ///
    /// Das Kommando wird vollständig angewendet, bevor der Ausgang
    /// geschaltet wird.
    pub fn step(&mut self, command: Option<BuzzerCommand>) -> BuzzerStep {
        let transition = command.map(|command| self.apply(command));
        BuzzerStep {
            transition,
            cycle: self.begin_cycle(),
        }
    }

    /// Schaltet den Ausgang passend zum aktuellen Modus
    ///
    /// Beeping: Ton an. Silent: sicherstellen dass der Ton aus ist.
    pub fn begin_cycle(&mut self) -> BuzzerCycle {
        match self.mode {
            BuzzerMode::Beeping => {
                self.tone.set_enabled(true);
                BuzzerCycle::Beep {
                    on_ms: self.pattern.on_ms,
                    off_ms: self.pattern.off_ms(),
                }
            }
            BuzzerMode::Silent => {
                self.tone.set_enabled(false);
                BuzzerCycle::Idle {
                    poll_ms: self.pattern.silent_poll_ms,
                }
            }
        }
    }

    /// Schaltet den Ton nach der Ton-Phase ab
    pub fn end_beep(&mut self) {
        self.tone.set_enabled(false);
    }

    pub fn mode(&self) -> BuzzerMode {
        self.mode
    }

    pub fn is_beeping(&self) -> bool {
        self.mode == BuzzerMode::Beeping
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FlagTone {
        enabled: bool,
    }

    impl ToneOutput for FlagTone {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    fn controller() -> BuzzerController<FlagTone> {
        BuzzerController::new(FlagTone::default(), BeepPattern::default())
    }

    #[test]
    fn test_starts_silent() {
        let buzzer = controller();
        assert_eq!(buzzer.mode(), BuzzerMode::Silent);
        assert!(!buzzer.tone().enabled);
    }

    #[test]
    fn test_toggle_switches_mode() {
        let mut buzzer = controller();
        let t = buzzer.apply(BuzzerCommand::ToggleBeep);
        assert_eq!(t.from, BuzzerMode::Silent);
        assert_eq!(t.to, BuzzerMode::Beeping);
        assert!(t.changed());
    }

    #[test]
    fn test_mute_when_silent_is_noop() {
        let mut buzzer = controller();
        let t = buzzer.apply(BuzzerCommand::Mute);
        assert!(!t.changed());
        assert_eq!(buzzer.mode(), BuzzerMode::Silent);
    }

    #[test]
    fn test_step_applies_command_before_output() {
        let mut buzzer = controller();
        let step = buzzer.step(Some(BuzzerCommand::ToggleBeep));
        assert_eq!(
            step.transition.map(|t| t.to),
            Some(BuzzerMode::Beeping)
        );
        assert_eq!(
            step.cycle,
            BuzzerCycle::Beep {
                on_ms: 300,
                off_ms: 700
            }
        );
        assert!(buzzer.tone().enabled);

        buzzer.end_beep();
        assert!(!buzzer.tone().enabled);
    }

    #[test]
    fn test_step_without_command_keeps_silent() {
        let mut buzzer = controller();
        let step = buzzer.step(None);
        assert_eq!(step.transition, None);
        assert_eq!(step.cycle, BuzzerCycle::Idle { poll_ms: 10 });
        assert!(!buzzer.tone().enabled);
    }
}
