use crate::{
    foundation::core::Point,
    scene::model::{CircleShape, ElementKind, EllipseShape, LineShape, RectShape},
    scene::path::PathCommand,
};

/// Lower a shape kind into path commands (scene coordinates, y-up).
///
/// Returns `None` for kinds that are not drawn as a single path (text, images, containers).
pub fn shape_commands(kind: &ElementKind) -> Option<Vec<PathCommand>> {
    match kind {
        ElementKind::Rect(r) => Some(rect_commands(r)),
        ElementKind::Circle(c) => Some(circle_commands(c)),
        ElementKind::Ellipse(e) => Some(ellipse_commands(e)),
        ElementKind::Line(l) => Some(line_commands(l)),
        ElementKind::Polygon(p) => Some(polygon_commands(&p.points)),
        ElementKind::Path(p) => Some(p.cmds.clone()),
        ElementKind::Text(_)
        | ElementKind::TextOnPath(_)
        | ElementKind::Image(_)
        | ElementKind::ChartContainer(_)
        | ElementKind::Group(_) => None,
    }
}

pub fn rect_commands(r: &RectShape) -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(r.x1, r.y1),
        PathCommand::line_to(r.x1, r.y2),
        PathCommand::line_to(r.x2, r.y2),
        PathCommand::line_to(r.x2, r.y1),
        PathCommand::ClosePath,
    ]
}

pub fn circle_commands(c: &CircleShape) -> Vec<PathCommand> {
    two_arc_ellipse(c.cx, c.cy, c.r, c.r)
}

pub fn ellipse_commands(e: &EllipseShape) -> Vec<PathCommand> {
    let cx = (e.x1 + e.x2) / 2.0;
    let cy = (e.y1 + e.y2) / 2.0;
    let rx = (e.x1 - e.x2).abs() / 2.0;
    let ry = (e.y1 - e.y2).abs() / 2.0;
    two_arc_ellipse(cx, cy, rx, ry)
}

pub fn line_commands(l: &LineShape) -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(l.x1, l.y1),
        PathCommand::line_to(l.x2, l.y2),
    ]
}

/// An empty polygon degenerates to a closed move at the origin.
pub fn polygon_commands(points: &[Point]) -> Vec<PathCommand> {
    let mut cmds = Vec::with_capacity(points.len() + 1);
    match points.split_first() {
        Some((first, rest)) => {
            cmds.push(PathCommand::MoveTo(*first));
            cmds.extend(rest.iter().map(|p| PathCommand::LineTo(*p)));
        }
        None => cmds.push(PathCommand::MoveTo(Point::ORIGIN)),
    }
    cmds.push(PathCommand::ClosePath);
    cmds
}

// Two half-ellipse arcs from the leftmost point through the rightmost one and back.
fn two_arc_ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(cx - rx, cy),
        PathCommand::arc_to(rx, ry, 0.0, true, false, cx + rx, cy),
        PathCommand::arc_to(rx, ry, 0.0, true, false, cx - rx, cy),
        PathCommand::ClosePath,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lower.rs"]
mod tests;
