use crate::{foundation::math::write_svg_number, scene::model::RigidTransform};

/// Rotations smaller than this (radians) are written as pure translations.
pub const ANGLE_EPSILON: f64 = 1e-7;

/// Serialize a rigid transform as an SVG `transform` attribute value.
///
/// The y translation and the rotation direction are both negated because the output y axis points
/// down. SVG rotations are in degrees, so the angle is converted from radians.
pub fn render_transform(transform: Option<&RigidTransform>) -> Option<String> {
    let t = transform?;
    let mut out = String::from("translate(");
    write_svg_number(&mut out, t.x);
    out.push(',');
    write_svg_number(&mut out, -t.y);
    out.push(')');
    if t.angle.abs() >= ANGLE_EPSILON {
        out.push_str(" rotate(");
        write_svg_number(&mut out, -t.angle.to_degrees());
        out.push(')');
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;
