//! Button-Monitor: Flankenerkennung und Kommando-Dispatch
//!
//! Entprellung = ein Sample pro Poll-Fenster + Flankenerkennung.
//! Prellen schneller als das Poll-Intervall wird nicht gefiltert.

use crate::channel::CommandSink;
use crate::suspend::SuspendHandle;
use crate::traits::ButtonInputs;
use crate::types::{Button, BuzzerCommand};

/// Erkennt steigende Flanken (nicht gedrückt → gedrückt)
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last: false }
    }

    /// Übernimmt das neue Sample, `true` bei steigender Flanke
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.last;
        self.last = pressed;
        rising
    }

    pub fn last(&self) -> bool {
        self.last
    }
}

/// Ergebnis einer Poll-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Steigende Flanke an Taster A
    pub a_pressed: bool,
    /// Steigende Flanke an Taster B
    pub b_pressed: bool,
    /// Neuer LED-Zustand nach Taster A (`Some(true)` = pausiert)
    pub led_suspended: Option<bool>,
    /// Anzahl verworfener Kommandos (Queue voll)
    pub dropped: u8,
}

impl PollOutcome {
    pub fn any_edge(&self) -> bool {
        self.a_pressed || self.b_pressed
    }
}

/// Pollt beide Taster und verteilt die Kommandos
pub struct ButtonMonitor<I: ButtonInputs> {
    inputs: I,
    btn_a: EdgeDetector,
    btn_b: EdgeDetector,
}

impl<I: ButtonInputs> ButtonMonitor<I> {
    pub fn new(inputs: I) -> Self {
        Self {
            inputs,
            btn_a: EdgeDetector::new(),
            btn_b: EdgeDetector::new(),
        }
    }

    /// Liest einen Taster, active-low → `true` = gedrückt
    fn is_pressed(&mut self, button: Button) -> bool {
        !self.inputs.read_level(button)
    }

    /// Eine Poll-Iteration
    ///
    /// - Taster A: LED-Task pausieren/fortsetzen, danach immer `Mute` senden
    /// - Taster B: `ToggleBeep` senden
    ///
    /// Volle Queue: Kommando wird verworfen und in `dropped` gezählt.
    pub fn poll<S: CommandSink + ?Sized>(
        &mut self,
        led: &SuspendHandle<'_>,
        sink: &S,
    ) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        let a_now = self.is_pressed(Button::A);
        if self.btn_a.update(a_now) {
            outcome.a_pressed = true;
            outcome.led_suspended = Some(led.toggle());
            if !sink.offer(BuzzerCommand::Mute) {
                outcome.dropped += 1;
            }
        }

        let b_now = self.is_pressed(Button::B);
        if self.btn_b.update(b_now) {
            outcome.b_pressed = true;
            if !sink.offer(BuzzerCommand::ToggleBeep) {
                outcome.dropped += 1;
            }
        }

        outcome
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }
}
