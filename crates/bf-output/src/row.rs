//! Plain data row types written by output backends.

use bf_field::{ArrayFactorProfile, IntensityField};

/// One sample of the normalized intensity map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSampleRow {
    pub x_m:       f64,
    pub y_m:       f64,
    pub intensity: f64,
}

/// One sample of the normalized array-factor profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRow {
    pub angle_deg: f64,
    pub value:     f64,
}

impl FieldSampleRow {
    /// Flatten a field into rows, lowest y first, x varying fastest.
    pub fn from_field(field: &IntensityField) -> Vec<FieldSampleRow> {
        field
            .samples()
            .map(|(x_m, y_m, intensity)| FieldSampleRow { x_m, y_m, intensity })
            .collect()
    }
}

impl ProfileRow {
    pub fn from_profile(profile: &ArrayFactorProfile) -> Vec<ProfileRow> {
        profile
            .iter()
            .map(|(angle_deg, value)| ProfileRow { angle_deg, value })
            .collect()
    }
}
