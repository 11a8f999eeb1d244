use crate::foundation::{
    core::{Point, Vec2},
    error::ChartError,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPathCommand", into = "RawPathCommand")]
/// A single path command in y-up scene coordinates.
///
/// The wire form is the producer's `{"cmd": "<letter>", "args": [...]}` record, with the same
/// argument order SVG uses for that letter.
pub enum PathCommand {
    /// `M x,y`
    MoveTo(Point),
    /// `L x,y`
    LineTo(Point),
    /// `C x1,y1,x2,y2,x,y`
    CubicTo { c1: Point, c2: Point, end: Point },
    /// `Q x1,y1,x,y`
    QuadTo { ctrl: Point, end: Point },
    /// `A rx,ry,rotation,large-arc,sweep,x,y`
    ArcTo(ArcTo),
    /// `Z`
    ClosePath,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Elliptical arc parameters, matching the SVG `A` command.
pub struct ArcTo {
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

impl PathCommand {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::MoveTo(Point::new(x, y))
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::LineTo(Point::new(x, y))
    }

    pub fn arc_to(
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        Self::ArcTo(ArcTo {
            radii: Vec2::new(rx, ry),
            x_rotation,
            large_arc,
            sweep,
            end: Point::new(x, y),
        })
    }

    /// SVG command letter.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CubicTo { .. } => 'C',
            Self::QuadTo { .. } => 'Q',
            Self::ArcTo(_) => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// Arguments in wire order.
    pub fn args(&self) -> Vec<f64> {
        fn flag(b: bool) -> f64 {
            if b { 1.0 } else { 0.0 }
        }

        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => vec![p.x, p.y],
            Self::CubicTo { c1, c2, end } => vec![c1.x, c1.y, c2.x, c2.y, end.x, end.y],
            Self::QuadTo { ctrl, end } => vec![ctrl.x, ctrl.y, end.x, end.y],
            Self::ArcTo(a) => vec![
                a.radii.x,
                a.radii.y,
                a.x_rotation,
                flag(a.large_arc),
                flag(a.sweep),
                a.end.x,
                a.end.y,
            ],
            Self::ClosePath => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct RawPathCommand {
    cmd: String,
    #[serde(default)]
    args: Vec<f64>,
}

impl TryFrom<RawPathCommand> for PathCommand {
    type Error = ChartError;

    fn try_from(raw: RawPathCommand) -> Result<Self, Self::Error> {
        let expected = match raw.cmd.as_str() {
            "M" | "L" => 2,
            "C" => 6,
            "Q" => 4,
            "A" => 7,
            "Z" => 0,
            other => {
                return Err(ChartError::validation(format!(
                    "unknown path command \"{other}\""
                )));
            }
        };
        if raw.args.len() != expected {
            return Err(ChartError::validation(format!(
                "path command \"{}\" takes {expected} args, got {}",
                raw.cmd,
                raw.args.len()
            )));
        }

        let a = &raw.args;
        let pt = |i: usize| Point::new(a[i], a[i + 1]);
        Ok(match raw.cmd.as_str() {
            "M" => Self::MoveTo(pt(0)),
            "L" => Self::LineTo(pt(0)),
            "C" => Self::CubicTo {
                c1: pt(0),
                c2: pt(2),
                end: pt(4),
            },
            "Q" => Self::QuadTo {
                ctrl: pt(0),
                end: pt(2),
            },
            "A" => Self::ArcTo(ArcTo {
                radii: Vec2::new(a[0], a[1]),
                x_rotation: a[2],
                large_arc: a[3] != 0.0,
                sweep: a[4] != 0.0,
                end: pt(5),
            }),
            _ => Self::ClosePath,
        })
    }
}

impl From<PathCommand> for RawPathCommand {
    fn from(cmd: PathCommand) -> Self {
        Self {
            cmd: cmd.letter().to_string(),
            args: cmd.args(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/path.rs"]
mod tests;
