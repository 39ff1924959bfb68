//! Frequency units and human-readable formatting.

use std::fmt;

/// SI prefixes offered for frequency entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyUnit {
    Hz,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl FrequencyUnit {
    /// Every unit, smallest first.
    pub const ALL: [FrequencyUnit; 6] = [
        FrequencyUnit::Hz,
        FrequencyUnit::Kilo,
        FrequencyUnit::Mega,
        FrequencyUnit::Giga,
        FrequencyUnit::Tera,
        FrequencyUnit::Peta,
    ];

    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            FrequencyUnit::Hz   => 1.0,
            FrequencyUnit::Kilo => 1e3,
            FrequencyUnit::Mega => 1e6,
            FrequencyUnit::Giga => 1e9,
            FrequencyUnit::Tera => 1e12,
            FrequencyUnit::Peta => 1e15,
        }
    }

    /// Convert a value expressed in this unit to Hz.
    #[inline]
    pub fn to_hz(self, value: f64) -> f64 {
        value * self.multiplier()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FrequencyUnit::Hz   => "Hz",
            FrequencyUnit::Kilo => "KHz",
            FrequencyUnit::Mega => "MHz",
            FrequencyUnit::Giga => "GHz",
            FrequencyUnit::Tera => "THz",
            FrequencyUnit::Peta => "PHz",
        }
    }

    /// Largest unit whose multiplier does not exceed `hz`.
    pub fn best_for(hz: f64) -> FrequencyUnit {
        FrequencyUnit::ALL
            .into_iter()
            .rev()
            .find(|u| hz >= u.multiplier())
            .unwrap_or(FrequencyUnit::Hz)
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render a frequency the way the control panel shows it.
///
/// Whole values print without decimals (`"100 KHz"`), fractional ones with
/// two (`"2.45 GHz"`).  Zero prints `"0 Hz"`; negative or NaN input prints
/// `"Invalid frequency"`.
pub fn format_frequency(hz: f64) -> String {
    if hz.is_nan() || hz < 0.0 {
        return "Invalid frequency".to_owned();
    }
    if hz == 0.0 {
        return "0 Hz".to_owned();
    }
    let unit = FrequencyUnit::best_for(hz);
    let value = hz / unit.multiplier();
    if value.fract() == 0.0 {
        format!("{value:.0} {unit}")
    } else {
        format!("{value:.2} {unit}")
    }
}
