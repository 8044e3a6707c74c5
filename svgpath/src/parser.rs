use std::iter::Peekable;

use log::debug;

use crate::command::Command;
use crate::error::{PathError, Result};
use crate::geom::path::Path;
use crate::geom::point::Point;
use crate::geom::segment::{Arc, CubicBezier, Line, Move, QuadraticBezier, Segment};
use crate::lexer::Tokenizer;
use crate::token::Token;

/// Parses path data into absolute segments.
///
/// A leading relative moveto is resolved against `current_pos`, which
/// defaults to the origin.
pub fn parse_path(path_data: &str, current_pos: Option<Point>) -> Result<Path> {
    PathParser::new(path_data, current_pos.unwrap_or_default()).parse()
}

pub struct PathParser<'a> {
    tokens: Peekable<Tokenizer<'a>>,
    current_pos: Point,
    start_pos: Option<Point>,
    command: Option<Command>,
    last_command: Option<Command>,
    absolute: bool,
    path: Path,
}

impl<'a> PathParser<'a> {
    pub fn new(path_data: &'a str, current_pos: Point) -> Self {
        PathParser {
            tokens: Tokenizer::new(path_data).peekable(),
            current_pos,
            start_pos: None,
            command: None,
            last_command: None,
            absolute: false,
            path: Path::new(),
        }
    }

    pub fn parse(mut self) -> Result<Path> {
        while let Some(&(position, token)) = self.tokens.peek() {
            match token {
                Token::Command(command, absolute) => {
                    self.tokens.next();
                    self.last_command = self.command;
                    self.command = Some(command);
                    self.absolute = absolute;
                }
                Token::Number(_) => {
                    // implicit repetition of the previous command
                    if self.command.is_none() {
                        return Err(PathError::UnallowedImplicitCommand { position });
                    }
                    self.last_command = self.command;
                }
            }

            if let Some(command) = self.command {
                self.invoke_command(command)?;
            }
        }
        Ok(self.path)
    }

    fn invoke_command(&mut self, command: Command) -> Result<()> {
        debug!(
            "{}{} at {:?}",
            command,
            if self.absolute { "" } else { " (relative)" },
            self.current_pos
        );
        match command {
            Command::MoveTo => self.move_to(),
            Command::ClosePath => {
                self.close_path();
                Ok(())
            }
            Command::LineTo => self.line_to(),
            Command::HorizontalLineTo => self.horizontal_line_to(),
            Command::VerticalLineTo => self.vertical_line_to(),
            Command::CurveTo => self.curve_to(),
            Command::SmoothCurveTo => self.smooth_curve_to(),
            Command::QuadraticCurveTo => self.quadratic_curve_to(),
            Command::SmoothQuadraticCurveTo => self.smooth_quadratic_curve_to(),
            Command::Arc => self.arc_to(),
        }
    }

    fn numbers<const N: usize>(&mut self, command: Command) -> Result<[f64; N]> {
        let mut values = [0.0; N];
        for (found, value) in values.iter_mut().enumerate() {
            match self.tokens.peek() {
                Some((_, token)) if token.is_number() => {
                    *value = token.as_f64()?;
                    self.tokens.next();
                }
                _ => {
                    return Err(PathError::TruncatedData {
                        command,
                        expected: N,
                        found,
                    })
                }
            }
        }
        Ok(values)
    }

    fn resolve(&self, x: f64, y: f64) -> Point {
        let mut pos = Point::new(x, y);
        if self.absolute {
            pos
        } else {
            pos.accumulate(self.current_pos)
        }
    }

    // M moveto
    fn move_to(&mut self) -> Result<()> {
        let [x, y] = self.numbers(Command::MoveTo)?;
        let target = self.resolve(x, y);
        self.path.push(Segment::Move(Move { to: target }));
        self.current_pos = target;
        self.start_pos = Some(target);
        // coordinate pairs after a moveto are implicit linetos
        self.command = Some(Command::LineTo);
        Ok(())
    }

    // Z closepath
    fn close_path(&mut self) {
        if let Some(start) = self.start_pos.take() {
            if self.current_pos != start {
                self.path.push(Segment::Line(Line {
                    start: self.current_pos,
                    end: start,
                }));
            }
            self.current_pos = start;
        }
        self.path.close();
        // no implicit commands after closing
        self.command = None;
    }

    fn push_line(&mut self, end: Point) {
        self.path.push(Segment::Line(Line {
            start: self.current_pos,
            end,
        }));
        self.current_pos = end;
    }

    // L lineto
    fn line_to(&mut self) -> Result<()> {
        let [x, y] = self.numbers(Command::LineTo)?;
        let end = self.resolve(x, y);
        self.push_line(end);
        Ok(())
    }

    // H horizontal lineto
    fn horizontal_line_to(&mut self) -> Result<()> {
        let [x] = self.numbers(Command::HorizontalLineTo)?;
        let mut end = Point::new(x, self.current_pos.y());
        if !self.absolute {
            end += Point::new(self.current_pos.x(), 0.0);
        }
        self.push_line(end);
        Ok(())
    }

    // V vertical lineto
    fn vertical_line_to(&mut self) -> Result<()> {
        let [y] = self.numbers(Command::VerticalLineTo)?;
        let mut end = Point::new(self.current_pos.x(), y);
        if !self.absolute {
            end += Point::new(0.0, self.current_pos.y());
        }
        self.push_line(end);
        Ok(())
    }

    fn push_cubic(&mut self, control1: Point, control2: Point, end: Point) {
        self.path.push(Segment::CubicBezier(CubicBezier {
            start: self.current_pos,
            control1,
            control2,
            end,
        }));
        self.current_pos = end;
    }

    fn push_quadratic(&mut self, control: Point, end: Point) {
        self.path.push(Segment::QuadraticBezier(QuadraticBezier {
            start: self.current_pos,
            control,
            end,
        }));
        self.current_pos = end;
    }

    // C curveto
    fn curve_to(&mut self) -> Result<()> {
        let [x1, y1, x2, y2, x, y] = self.numbers(Command::CurveTo)?;
        let control1 = self.resolve(x1, y1);
        let control2 = self.resolve(x2, y2);
        let end = self.resolve(x, y);
        self.push_cubic(control1, control2, end);
        Ok(())
    }

    // S smooth curveto, first control point mirrors the previous second one
    fn smooth_curve_to(&mut self) -> Result<()> {
        let control1 = match (self.last_command, self.path.last()) {
            (
                Some(Command::CurveTo | Command::SmoothCurveTo),
                Some(Segment::CubicBezier(previous)),
            ) => self.current_pos + self.current_pos - previous.control2,
            _ => self.current_pos,
        };
        let [x2, y2, x, y] = self.numbers(Command::SmoothCurveTo)?;
        let control2 = self.resolve(x2, y2);
        let end = self.resolve(x, y);
        self.push_cubic(control1, control2, end);
        Ok(())
    }

    // Q quadratic curveto
    fn quadratic_curve_to(&mut self) -> Result<()> {
        let [x1, y1, x, y] = self.numbers(Command::QuadraticCurveTo)?;
        let control = self.resolve(x1, y1);
        let end = self.resolve(x, y);
        self.push_quadratic(control, end);
        Ok(())
    }

    // T smooth quadratic curveto, control point mirrors the previous one
    fn smooth_quadratic_curve_to(&mut self) -> Result<()> {
        let control = match (self.last_command, self.path.last()) {
            (
                Some(Command::QuadraticCurveTo | Command::SmoothQuadraticCurveTo),
                Some(Segment::QuadraticBezier(previous)),
            ) => self.current_pos + self.current_pos - previous.control,
            _ => self.current_pos,
        };
        let [x, y] = self.numbers(Command::SmoothQuadraticCurveTo)?;
        let end = self.resolve(x, y);
        self.push_quadratic(control, end);
        Ok(())
    }

    // A elliptical arc, only the end point is relative
    fn arc_to(&mut self) -> Result<()> {
        let [rx, ry, rotation, large_arc, sweep, x, y] = self.numbers(Command::Arc)?;
        let end = self.resolve(x, y);
        self.path.push(Segment::Arc(Arc {
            start: self.current_pos,
            radius: Point::new(rx, ry),
            rotation,
            large_arc: large_arc != 0.0,
            sweep: sweep != 0.0,
            end,
        }));
        self.current_pos = end;
        Ok(())
    }
}
