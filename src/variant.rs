use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// Output characteristic of an SHT4x analog sensor, printed as the suffix of the part number
/// (e.g. SHT40-HD1B).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Standard linear RH and T outputs.
    #[default]
    Hd1b,
    /// Industrial RH range, table-based T output (affine approximation).
    Id1b,
    /// Industrial RH range, standard T output.
    Jd1b,
    /// RH only; the T output is left floating.
    Kd1b,
    /// RH defined by two calibration points, linear T output.
    Ld1b,
}

/// Affine map from the output ratio Vout/VDD to a physical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub offset: f32,
    pub slope: f32,
}

impl Line {
    #[inline]
    pub fn apply(&self, ratio: f32) -> f32 {
        self.offset + self.slope * ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub humidity: Line,
    /// `None` for variants without a usable temperature output.
    pub temperature: Option<Line>,
}

impl Calibration {
    /// Relative humidity in %RH for the given ratio. Not clamped.
    #[inline]
    pub fn humidity(&self, ratio: f32) -> f32 {
        self.humidity.apply(ratio)
    }

    /// Temperature in °C for the given ratio, or NaN when the variant has no temperature output.
    #[inline]
    pub fn temperature_celsius(&self, ratio: f32) -> f32 {
        match self.temperature {
            Some(line) => line.apply(ratio),
            None => f32::NAN,
        }
    }
}

// datasheet coefficients, kept in their quotient form
mod coefficients {
    use super::Line;

    pub const RH_STANDARD: Line = Line {
        offset: -12.5,
        slope: 125.0,
    };
    pub const RH_INDUSTRIAL: Line = Line {
        offset: -(19.7 / 0.54),
        slope: 100.0 / 0.54,
    };
    pub const RH_KD1B: Line = Line {
        offset: -(16.44 / 0.6489),
        slope: 100.0 / 0.6489,
    };

    // LD1B humidity passes through 0 %RH at 0.197 and 100 %RH at 0.737
    const LD1B_RH_LOW: f32 = 0.197;
    const LD1B_RH_HIGH: f32 = 0.737;
    const LD1B_RH_SLOPE: f32 = 100.0 / (LD1B_RH_HIGH - LD1B_RH_LOW);
    pub const RH_LD1B: Line = Line {
        offset: -LD1B_RH_SLOPE * LD1B_RH_LOW,
        slope: LD1B_RH_SLOPE,
    };

    pub const T_STANDARD: Line = Line {
        offset: -66.875,
        slope: 218.75,
    };
    pub const T_ID1B: Line = Line {
        offset: 75.87,
        slope: -106.75,
    };
    pub const T_LD1B: Line = Line {
        offset: -56.9,
        slope: 134.6,
    };
}
use coefficients::*;

// indexed by `Variant as usize`
const CALIBRATIONS: [Calibration; 5] = [
    Calibration {
        humidity: RH_STANDARD,
        temperature: Some(T_STANDARD),
    },
    Calibration {
        humidity: RH_INDUSTRIAL,
        temperature: Some(T_ID1B),
    },
    Calibration {
        humidity: RH_INDUSTRIAL,
        temperature: Some(T_STANDARD),
    },
    Calibration {
        humidity: RH_KD1B,
        temperature: None,
    },
    Calibration {
        humidity: RH_LD1B,
        temperature: Some(T_LD1B),
    },
];

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Hd1b,
        Variant::Id1b,
        Variant::Jd1b,
        Variant::Kd1b,
        Variant::Ld1b,
    ];

    #[inline]
    pub fn calibration(self) -> &'static Calibration {
        &CALIBRATIONS[self as usize]
    }

    pub fn has_temperature(self) -> bool {
        self.calibration().temperature.is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Hd1b => "HD1B",
            Variant::Id1b => "ID1B",
            Variant::Jd1b => "JD1B",
            Variant::Kd1b => "KD1B",
            Variant::Ld1b => "LD1B",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnknownVariant)
    }
}

impl TryFrom<u8> for Variant {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Variant::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::InvalidVariantCode(code))
    }
}

impl From<Variant> for u8 {
    fn from(value: Variant) -> Self {
        value as u8
    }
}
