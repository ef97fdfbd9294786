//! Gemeinsame Mocks für die Integration Tests
//!
//! Die Mocks implementieren die Hardware-Traits aus esp-core in-memory.

#![allow(dead_code)]

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use esp_core::{Button, ButtonInputs, LedLevels, LedLines, LedPhase, ToneOutput};

// ============================================================================
// Mock LED Lines
// ============================================================================

pub struct MockLedLines {
    /// Aktueller Pegel aller drei Leitungen
    pub levels: LedLevels,
    /// Jeder set_level() Aufruf in Reihenfolge
    pub writes: Vec<(LedPhase, bool)>,
    /// Höchste Anzahl gleichzeitig aktiver Leitungen
    pub max_simultaneous_high: usize,
}

impl MockLedLines {
    pub fn new() -> Self {
        Self {
            levels: LedLevels::new(false, false, false),
            writes: Vec::new(),
            max_simultaneous_high: 0,
        }
    }

    /// Phasen in der Reihenfolge in der sie eingeschaltet wurden
    pub fn switched_on(&self) -> Vec<LedPhase> {
        self.writes
            .iter()
            .filter(|(_, high)| *high)
            .map(|(phase, _)| *phase)
            .collect()
    }
}

pub fn high_count(levels: LedLevels) -> usize {
    [levels.r, levels.g, levels.b]
        .iter()
        .filter(|high| **high)
        .count()
}

impl LedLines for MockLedLines {
    fn set_level(&mut self, phase: LedPhase, high: bool) {
        match phase {
            LedPhase::Red => self.levels.r = high,
            LedPhase::Green => self.levels.g = high,
            LedPhase::Blue => self.levels.b = high,
        }
        self.writes.push((phase, high));
        self.max_simultaneous_high = self.max_simultaneous_high.max(high_count(self.levels));
    }
}

// ============================================================================
// Mock Tone Output
// ============================================================================

#[derive(Default)]
pub struct MockTone {
    pub enabled: bool,
    /// Anzahl set_enabled(true) Aufrufe
    pub enable_count: usize,
    /// Anzahl set_enabled(false) Aufrufe
    pub disable_count: usize,
}

impl MockTone {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToneOutput for MockTone {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.enable_count += 1;
        } else {
            self.disable_count += 1;
        }
    }
}

// ============================================================================
// Mock Buttons (active-low wie die echte Hardware)
// ============================================================================

#[derive(Default)]
pub struct MockButtons {
    pub a_pressed: bool,
    pub b_pressed: bool,
    pub reads: usize,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::A => self.a_pressed = pressed,
            Button::B => self.b_pressed = pressed,
        }
    }
}

impl ButtonInputs for MockButtons {
    fn read_level(&mut self, button: Button) -> bool {
        self.reads += 1;
        // gedrückt = Low
        match button {
            Button::A => !self.a_pressed,
            Button::B => !self.b_pressed,
        }
    }
}

// ============================================================================
// Async Helfer (ohne Executor)
// ============================================================================

/// Ersetzt den Timer in Tests: erster Poll Pending, zweiter Poll Ready
pub struct YieldOnce {
    yielded: bool,
}

pub fn yield_once() -> YieldOnce {
    YieldOnce { yielded: false }
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Pollt einen gepinnten Future genau einmal
pub fn poll_once<F: Future + ?Sized>(future: Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(Waker::noop());
    future.poll(&mut cx)
}
