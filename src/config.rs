use crate::{Error, Result, Variant};

/// Full-scale count of a 10-bit ADC, the most common resolution on small microcontrollers.
pub const DEFAULT_FULL_SCALE: u16 = 1023;

/// Conversion settings of a `crate::Sht4xAnalog` reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// ADC count corresponding to VDD. A value of 0 makes every ratio 0.
    pub full_scale: u16,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            full_scale: DEFAULT_FULL_SCALE,
            variant: Variant::default(),
        }
    }
}

impl Config {
    /// Default variant with the full-scale count of an ADC with `bits` of resolution (1 to 16).
    pub fn with_resolution(bits: u8) -> Result<Self> {
        Ok(Self {
            full_scale: full_scale_for_bits(bits)?,
            ..Default::default()
        })
    }

    pub fn variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }
}

/// Largest count an ADC with `bits` of resolution can return.
pub fn full_scale_for_bits(bits: u8) -> Result<u16> {
    match bits {
        1..=16 => Ok((u32::MAX >> (32 - u32::from(bits))) as u16),
        _ => Err(Error::InvalidResolution(bits)),
    }
}
