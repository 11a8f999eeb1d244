use super::*;
use crate::geometry::lower::{circle_commands, rect_commands};
use crate::scene::model::{CircleShape, RectShape};

#[test]
fn rect_serializes_with_negated_y() {
    let d = render_svg_path(&rect_commands(&RectShape {
        x1: 0.0,
        y1: 0.0,
        x2: 10.0,
        y2: 10.0,
    }));
    assert_eq!(d, "M 0,0 L 0,-10 L 10,-10 L 10,0 Z");
    // Three explicit lines; `Z` draws the fourth edge.
    assert_eq!(d.matches('L').count(), 3);
    assert_eq!(d.matches('Z').count(), 1);
}

#[test]
fn arc_flips_only_the_end_point() {
    let d = render_svg_path(&[
        PathCommand::move_to(1.0, 2.0),
        PathCommand::arc_to(3.0, 4.0, 15.0, true, false, 5.0, 6.0),
    ]);
    assert_eq!(d, "M 1,-2 A 3,4,15,1,0,5,-6");
}

#[test]
fn curves_flip_every_y_argument() {
    let d = render_svg_path(&[
        PathCommand::CubicTo {
            c1: Point::new(1.0, 2.0),
            c2: Point::new(3.0, -4.0),
            end: Point::new(5.0, 6.5),
        },
        PathCommand::QuadTo {
            ctrl: Point::new(0.1, 0.2),
            end: Point::new(0.3, 0.0),
        },
    ]);
    assert_eq!(d, "C 1,-2,3,4,5,-6.5 Q 0.1,-0.2,0.3,0");
}

#[test]
fn float_artifacts_do_not_leak() {
    let d = render_svg_path(&[PathCommand::line_to(0.1 + 0.2, 1.0 / 3.0)]);
    assert_eq!(d, "L 0.3,-0.33333333");
}

#[test]
fn empty_command_list_is_empty_data() {
    assert_eq!(render_svg_path(&[]), "");
    assert!(bounding_box(&[]).is_none());
}

#[test]
fn circle_bounds_are_in_output_space() {
    let cmds = circle_commands(&CircleShape {
        cx: 10.0,
        cy: 20.0,
        r: 5.0,
    });
    let bb = bounding_box(&cmds).unwrap();
    assert!((bb.x0 - 5.0).abs() < 0.05);
    assert!((bb.x1 - 15.0).abs() < 0.05);
    assert!((bb.y0 + 25.0).abs() < 0.05);
    assert!((bb.y1 + 15.0).abs() < 0.05);
}

#[test]
fn rect_bez_path_is_flipped() {
    let path = to_bez_path(&rect_commands(&RectShape {
        x1: 0.0,
        y1: 0.0,
        x2: 4.0,
        y2: 2.0,
    }));
    let bb = path.bounding_box();
    assert_eq!((bb.x0, bb.y0, bb.x1, bb.y1), (0.0, -2.0, 4.0, 0.0));
}
