// Buzzer-Tongenerator über das LEDC Peripheral
//
// Frequenz und Tastverhältnis werden einmalig konfiguriert.
// Ein/Aus = Duty auf BUZZER_DUTY_PERCENT bzw. 0 setzen.

use defmt::{Debug2Format, error};
use esp_core::{StartupError, ToneOutput};
use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

// LEDC und Timer müssen 'static sein, weil der Channel sie ausleiht
static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static TONE_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Real Hardware Tongenerator (passiver Buzzer an LEDC Channel 0)
pub struct LedcTone {
    channel: channel::Channel<'static, LowSpeed>,
    duty_pct: u8,
}

impl LedcTone {
    /// Konfiguriert LEDC Timer 0 auf `freq_hz` und Channel 0 auf den Buzzer-Pin
    ///
    /// Der Ton ist nach dem Aufruf abgeschaltet (Duty 0).
    ///
    /// # Fehlerbehandlung
    /// Gibt `StartupError::ToneUnavailable` zurück wenn Timer oder Channel
    /// nicht konfiguriert werden können (oder `new` zweimal aufgerufen wird).
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
        buzzer_pin: esp_hal::peripherals::GPIO10<'static>,
        freq_hz: u32,
        duty_pct: u8,
    ) -> Result<Self, StartupError> {
        let ledc = LEDC
            .try_init(Ledc::new(ledc_peripheral))
            .ok_or(StartupError::ToneUnavailable)?;
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = ledc;

        let tone_timer = TONE_TIMER
            .try_init(ledc.timer::<LowSpeed>(timer::Number::Timer0))
            .ok_or(StartupError::ToneUnavailable)?;
        tone_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(freq_hz),
            })
            .map_err(|e| {
                error!("Buzzer: timer config failed: {}", Debug2Format(&e));
                StartupError::ToneUnavailable
            })?;
        let tone_timer: &'static timer::Timer<'static, LowSpeed> = tone_timer;

        let mut channel = ledc.channel(channel::Number::Channel0, buzzer_pin);
        channel
            .configure(channel::config::Config {
                timer: tone_timer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|e| {
                error!("Buzzer: channel config failed: {}", Debug2Format(&e));
                StartupError::ToneUnavailable
            })?;

        Ok(Self { channel, duty_pct })
    }
}

impl ToneOutput for LedcTone {
    fn set_enabled(&mut self, enabled: bool) {
        let duty = if enabled { self.duty_pct } else { 0 };
        if let Err(e) = self.channel.set_duty(duty) {
            error!("Buzzer: failed to set duty {}%: {}", duty, Debug2Format(&e));
        }
    }
}
