#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Display density scale factor (device pixels per density-independent pixel).
pub struct Density(pub f32);

impl Density {
    /// Baseline density where one dip equals one device pixel.
    pub const MEDIUM: Self = Self(1.0);

    /// Convert a density-independent size to device pixels.
    ///
    /// Truncates toward zero, matching the conventional dip-to-px cast.
    pub fn dip_to_px(self, dip: f32) -> i32 {
        (dip * self.0) as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::MEDIUM
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
