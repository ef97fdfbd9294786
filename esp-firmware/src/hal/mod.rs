// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus esp-core für die echte
// ESP32-C6 Hardware (GPIO + LEDC). Tests nutzen Mocks in esp-tests.

pub mod buttons;
pub mod leds;
pub mod tone;

pub use buttons::GpioButtons;
pub use leds::GpioLedLines;
pub use tone::LedcTone;
