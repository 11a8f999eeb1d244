pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Device color with channels in the sRGB `0..=255` range.
///
/// Channels are kept as `f64` so filtered colors can carry fractional (or slightly negative)
/// values until they are formatted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Build a color from raw channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel to at most 255. Values below zero are left untouched.
    pub fn clamp_upper(self) -> Self {
        Self {
            r: self.r.min(255.0),
            g: self.g.min(255.0),
            b: self.b.min(255.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
