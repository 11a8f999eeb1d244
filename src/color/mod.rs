//! Perceptual color adjustment.

/// Saturation/lightness filter and numeric modifiers.
pub mod filter;
/// sRGB and CIE L\*a\*b\* conversion.
pub mod lab;
