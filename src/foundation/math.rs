use std::fmt::Write;

/// Decimal places kept when writing numbers into SVG attributes.
pub(crate) const SVG_NUMBER_DIGITS: usize = 8;

/// SplitMix64 generator; deterministic for a given seed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitMix64(u64);

impl SplitMix64 {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(Self::GOLDEN_GAMMA);
        mix64(self.0)
    }
}

pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Format a number for SVG output.
///
/// Rounds to [`SVG_NUMBER_DIGITS`] decimals, trims trailing zeros and a dangling point, and never
/// prints a negative zero. Non-finite values are written as `0`.
pub fn svg_number(v: f64) -> String {
    let mut out = String::new();
    write_svg_number(&mut out, v);
    out
}

pub(crate) fn write_svg_number(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    let start = out.len();
    let _ = write!(out, "{v:.prec$}", prec = SVG_NUMBER_DIGITS);
    if out[start..].contains('.') {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }
    if &out[start..] == "-0" {
        out.truncate(start);
        out.push('0');
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
