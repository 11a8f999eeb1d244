use crate::{
    color::lab::{lab_to_srgb, srgb_to_lab},
    foundation::core::Color,
    scene::model::{ColorFilter, NumberModifier},
};

/// Apply a [`NumberModifier`] to `value`.
///
/// `set` wins outright; otherwise `multiply`, `add` and `pow` run in that order, each skipped when
/// absent.
pub fn modify_number(value: f64, modifier: &NumberModifier) -> f64 {
    if let Some(v) = modifier.set {
        return v;
    }
    let mut v = value;
    if let Some(m) = modifier.multiply {
        v *= m;
    }
    if let Some(a) = modifier.add {
        v += a;
    }
    if let Some(p) = modifier.pow {
        v = v.powf(p);
    }
    v
}

impl NumberModifier {
    /// See [`modify_number`].
    pub fn apply(&self, value: f64) -> f64 {
        modify_number(value, self)
    }
}

/// Adjust saturation (Lab chroma) and lightness (Lab `L`, normalized to `0..=1`) of `color`.
///
/// A filter with neither modifier returns the color unchanged. The result is clamped above at
/// 255 per channel; negative channels are passed through.
pub fn apply_color_filter(color: Color, filter: &ColorFilter) -> Color {
    if filter.is_empty() {
        return color;
    }

    let mut lab = srgb_to_lab(color);

    if let Some(saturation) = &filter.saturation {
        let s = lab.chroma();
        let s_prime = modify_number(s, saturation);
        if s == 0.0 {
            // Hue is undefined on the neutral axis.
            lab.a = 0.0;
            lab.b = 0.0;
        } else {
            lab.a *= s_prime / s;
            lab.b *= s_prime / s;
        }
    }

    if let Some(lightness) = &filter.lightness {
        lab.l = modify_number(lab.l / 100.0, lightness) * 100.0;
    }

    lab_to_srgb(lab).clamp_upper()
}

/// Blend each channel toward the color's luminance (`0.3 r + 0.6 g + 0.1 b`).
///
/// `amount` of 0 keeps the color, 1 yields a gray. Standalone tone helper; the color filter does
/// not use it.
pub fn blend_toward_luminance(color: Color, amount: f64) -> Color {
    let lum = 0.3 * color.r + 0.6 * color.g + 0.1 * color.b;
    let mix = |c: f64| c + (lum - c) * amount;
    Color::rgb(mix(color.r), mix(color.g), mix(color.b)).clamp_upper()
}

#[cfg(test)]
#[path = "../../tests/unit/color/filter.rs"]
mod tests;
