use kurbo::Shape;

use crate::{
    foundation::core::{BezPath, Point, Rect},
    foundation::math::write_svg_number,
    scene::path::PathCommand,
};

/// Arc flattening tolerance used when exporting arcs to cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// Serialize commands into SVG path data, negating every y coordinate.
///
/// Tokens are separated by a single space and arguments by commas, e.g. `M 0,-1 L 2,-3 Z`. Arc
/// radii, rotation and flags are written as-is; only the arc's end point is flipped.
pub fn render_svg_path(cmds: &[PathCommand]) -> String {
    let mut out = String::with_capacity(cmds.len() * 16);
    for (i, cmd) in cmds.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(cmd.letter());
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                out.push(' ');
                write_point(&mut out, p);
            }
            PathCommand::CubicTo { c1, c2, end } => {
                out.push(' ');
                write_point(&mut out, c1);
                out.push(',');
                write_point(&mut out, c2);
                out.push(',');
                write_point(&mut out, end);
            }
            PathCommand::QuadTo { ctrl, end } => {
                out.push(' ');
                write_point(&mut out, ctrl);
                out.push(',');
                write_point(&mut out, end);
            }
            PathCommand::ArcTo(a) => {
                out.push(' ');
                for v in [a.radii.x, a.radii.y, a.x_rotation] {
                    write_svg_number(&mut out, v);
                    out.push(',');
                }
                out.push(if a.large_arc { '1' } else { '0' });
                out.push(',');
                out.push(if a.sweep { '1' } else { '0' });
                out.push(',');
                write_point(&mut out, a.end);
            }
            PathCommand::ClosePath => {}
        }
    }
    out
}

fn write_point(out: &mut String, p: Point) {
    write_svg_number(out, p.x);
    out.push(',');
    write_svg_number(out, -p.y);
}

fn flip(p: Point) -> Point {
    Point::new(p.x, -p.y)
}

/// Build the output-space (y-down) geometry described by `cmds`.
///
/// Arcs are converted with SVG semantics and flattened into cubic segments; degenerate arcs
/// become straight lines.
pub fn to_bez_path(cmds: &[PathCommand]) -> BezPath {
    let mut path = BezPath::new();
    let mut current = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;

    for cmd in cmds {
        match *cmd {
            PathCommand::MoveTo(p) => {
                current = flip(p);
                subpath_start = current;
                path.move_to(current);
            }
            PathCommand::LineTo(p) => {
                current = flip(p);
                path.line_to(current);
            }
            PathCommand::CubicTo { c1, c2, end } => {
                current = flip(end);
                path.curve_to(flip(c1), flip(c2), current);
            }
            PathCommand::QuadTo { ctrl, end } => {
                current = flip(end);
                path.quad_to(flip(ctrl), current);
            }
            PathCommand::ArcTo(a) => {
                let to = flip(a.end);
                let svg_arc = kurbo::SvgArc {
                    from: current,
                    to,
                    radii: a.radii,
                    x_rotation: a.x_rotation.to_radians(),
                    large_arc: a.large_arc,
                    sweep: a.sweep,
                };
                match kurbo::Arc::from_svg_arc(&svg_arc) {
                    Some(arc) => {
                        for el in arc.append_iter(ARC_TOLERANCE) {
                            path.push(el);
                        }
                    }
                    None => path.line_to(to),
                }
                current = to;
            }
            PathCommand::ClosePath => {
                path.close_path();
                current = subpath_start;
            }
        }
    }
    path
}

/// Output-space bounds of the geometry, or `None` when there are no commands.
pub fn bounding_box(cmds: &[PathCommand]) -> Option<Rect> {
    if cmds.is_empty() {
        return None;
    }
    Some(to_bez_path(cmds).bounding_box())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/svg_path.rs"]
mod tests;
