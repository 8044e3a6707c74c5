use crate::geom::point::Point;

/// Start of a new subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

/// Elliptical arc. `radius` holds rx and ry, `rotation` is the x-axis
/// rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub radius: Point,
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Move(Move),
    Line(Line),
    CubicBezier(CubicBezier),
    QuadraticBezier(QuadraticBezier),
    Arc(Arc),
}

impl Segment {
    pub fn start(&self) -> Point {
        match self {
            Segment::Move(m) => m.to,
            Segment::Line(l) => l.start,
            Segment::CubicBezier(c) => c.start,
            Segment::QuadraticBezier(q) => q.start,
            Segment::Arc(a) => a.start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Move(m) => m.to,
            Segment::Line(l) => l.end,
            Segment::CubicBezier(c) => c.end,
            Segment::QuadraticBezier(q) => q.end,
            Segment::Arc(a) => a.end,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Segment::Move(_))
    }
}
