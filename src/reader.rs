use log::{debug, trace};

use crate::{AnalogInput, Config, Variant};

/// Normalizes a raw ADC count to the output ratio Vout/VDD. A full-scale count of 0 yields 0.
#[inline]
pub fn ratio(raw: u16, full_scale: u16) -> f32 {
    if full_scale == 0 {
        return 0.0;
    }
    f32::from(raw) / f32::from(full_scale)
}

#[inline]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// One humidity and one temperature reading taken back to back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Relative humidity in %RH, always within 0 to 100.
    pub humidity: f32,
    /// Temperature in °C, NaN when no temperature output is available.
    pub temperature: f32,
}

impl Measurement {
    pub fn temperature_fahrenheit(&self) -> f32 {
        celsius_to_fahrenheit(self.temperature)
    }
}

/// Reader for an SHT4x analog sensor wired to two ADC inputs of the platform.
///
/// The temperature pin is optional: RH-only wiring (and the RH-only KD1B variant) report NaN for
/// every temperature read.
pub struct Sht4xAnalog<A: AnalogInput> {
    adc: A,
    humidity_pin: A::Pin,
    temperature_pin: Option<A::Pin>,
    config: Config,
}

impl<A: AnalogInput> Sht4xAnalog<A> {
    /// Creates a reader for a 10-bit ADC and the HD1B variant. No pins are touched until `init()`.
    pub fn new(adc: A, humidity_pin: A::Pin, temperature_pin: Option<A::Pin>) -> Self {
        Self::with_config(adc, humidity_pin, temperature_pin, Config::default())
    }

    pub fn with_config(
        adc: A,
        humidity_pin: A::Pin,
        temperature_pin: Option<A::Pin>,
        config: Config,
    ) -> Self {
        Self {
            adc,
            humidity_pin,
            temperature_pin,
            config,
        }
    }

    /// Configures the humidity pin and, if wired, the temperature pin as analog inputs. Safe to
    /// call repeatedly.
    pub fn init(&mut self) {
        debug!(
            "configuring SHT4x-{} analog inputs (temperature channel: {})",
            self.config.variant,
            self.temperature_pin.is_some()
        );
        self.adc.configure_input(self.humidity_pin);
        if let Some(pin) = self.temperature_pin {
            self.adc.configure_input(pin);
        }
    }

    pub fn read_raw_humidity(&mut self) -> u16 {
        let raw = self.adc.sample(self.humidity_pin);
        trace!("raw RH sample: {}", raw);
        raw
    }

    /// Raw count of the temperature output, or 0 if no temperature pin is wired.
    pub fn read_raw_temperature(&mut self) -> u16 {
        match self.temperature_pin {
            None => 0,
            Some(pin) => {
                let raw = self.adc.sample(pin);
                trace!("raw T sample: {}", raw);
                raw
            }
        }
    }

    /// Relative humidity in %RH, clamped to 0..=100 since the calibration lines extrapolate past
    /// the physical range near the supply rails.
    pub fn read_humidity(&mut self) -> f32 {
        let raw = self.read_raw_humidity();
        let ratio = self.normalize(raw);
        self.config
            .variant
            .calibration()
            .humidity(ratio)
            .clamp(0.0, 100.0)
    }

    /// Temperature in °C, not clamped. NaN if no temperature pin is wired or the variant has no
    /// temperature output; the pin is not sampled in either case.
    pub fn read_temperature_celsius(&mut self) -> f32 {
        let Some(line) = self.config.variant.calibration().temperature else {
            return f32::NAN;
        };
        if self.temperature_pin.is_none() {
            return f32::NAN;
        }
        let raw = self.read_raw_temperature();
        line.apply(self.normalize(raw))
    }

    pub fn read_temperature_fahrenheit(&mut self) -> f32 {
        let celsius = self.read_temperature_celsius();
        if celsius.is_nan() {
            return f32::NAN;
        }
        celsius_to_fahrenheit(celsius)
    }

    pub fn measure(&mut self) -> Measurement {
        Measurement {
            humidity: self.read_humidity(),
            temperature: self.read_temperature_celsius(),
        }
    }

    /// True when temperature reads can return a value other than NaN.
    pub fn has_temperature(&self) -> bool {
        self.temperature_pin.is_some() && self.config.variant.has_temperature()
    }

    pub fn set_full_scale(&mut self, full_scale: u16) {
        debug!("ADC full scale set to {}", full_scale);
        self.config.full_scale = full_scale;
    }

    pub fn set_variant(&mut self, variant: Variant) {
        debug!("SHT4x analog variant set to {}", variant);
        self.config.variant = variant;
    }

    /// Takes effect on the next read; call `init()` again if the new pin needs configuring.
    pub fn set_humidity_pin(&mut self, pin: A::Pin) {
        self.humidity_pin = pin;
    }

    /// Takes effect on the next read; call `init()` again if the new pin needs configuring.
    pub fn set_temperature_pin(&mut self, pin: Option<A::Pin>) {
        self.temperature_pin = pin;
    }

    pub fn full_scale(&self) -> u16 {
        self.config.full_scale
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn humidity_pin(&self) -> A::Pin {
        self.humidity_pin
    }

    pub fn temperature_pin(&self) -> Option<A::Pin> {
        self.temperature_pin
    }

    /// Gives back the analog-input collaborator.
    pub fn release(self) -> A {
        self.adc
    }

    fn normalize(&self, raw: u16) -> f32 {
        let ratio = ratio(raw, self.config.full_scale);
        trace!("Vout/VDD = {}", ratio);
        ratio
    }
}
