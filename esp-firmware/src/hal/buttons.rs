// Taster-Eingänge - zwei GPIO Inputs mit internem Pull-Up

use esp_core::{Button, ButtonInputs};
use esp_hal::gpio::Input;

/// Real Hardware Taster
///
/// Gedrückt = Low (Pull-Up), die Invertierung macht der ButtonMonitor.
pub struct GpioButtons {
    btn_a: Input<'static>,
    btn_b: Input<'static>,
}

impl GpioButtons {
    pub fn new(btn_a: Input<'static>, btn_b: Input<'static>) -> Self {
        Self { btn_a, btn_b }
    }
}

impl ButtonInputs for GpioButtons {
    fn read_level(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.btn_a.is_high(),
            Button::B => self.btn_b.is_high(),
        }
    }
}
