//! Reads a simulated SHT40-JD1B wired to a 12-bit ADC and prints the converted values.
//!
//! ```
//! $ cargo run --example simulated
//! pin 0 configured as analog input
//! pin 1 configured as analog input
//! raw RH = 2048, raw T = 1420
//!  T = 8.98°C (48.16°F)
//! RH = 56.13%
//! ```

use sht4x_analog::{AnalogInput, Config, Sht4xAnalog, Variant};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const PIN_RH: u8 = 0; // A0
const PIN_T: u8 = 1; // A1

/// Stand-in for the platform ADC returning fixed counts.
struct SimulatedAdc {
    rh_count: u16,
    t_count: u16,
}

impl AnalogInput for SimulatedAdc {
    type Pin = u8;

    fn configure_input(&mut self, pin: u8) {
        println!("pin {} configured as analog input", pin);
    }

    fn sample(&mut self, pin: u8) -> u16 {
        match pin {
            PIN_RH => self.rh_count,
            PIN_T => self.t_count,
            _ => 0,
        }
    }
}

pub fn main() -> Result<()> {
    let variant: Variant = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("JD1B")
        .parse()?;
    let config = Config::with_resolution(12)?.variant(variant);

    let adc = SimulatedAdc {
        rh_count: 2048,
        t_count: 1420,
    };
    let mut sensor = Sht4xAnalog::with_config(adc, PIN_RH, Some(PIN_T), config);
    sensor.init();

    println!(
        "raw RH = {}, raw T = {}",
        sensor.read_raw_humidity(),
        sensor.read_raw_temperature()
    );
    let measurement = sensor.measure();
    if sensor.has_temperature() {
        println!(
            " T = {:.2}°C ({:.2}°F)",
            measurement.temperature,
            measurement.temperature_fahrenheit()
        );
    } else {
        println!(" T = n/a (SHT40-{} has no temperature output)", variant);
    }
    println!("RH = {:.2}%", measurement.humidity);

    Ok(())
}
