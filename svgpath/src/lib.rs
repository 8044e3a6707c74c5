mod command;

pub mod error;
pub mod geom;
pub mod lexer;
pub mod parser;
pub mod token;

pub use command::Command;
pub use error::PathError;
pub use geom::path::Path;
pub use geom::point::Point;
pub use geom::segment::{Arc, CubicBezier, Line, Move, QuadraticBezier, Segment};
pub use parser::parse_path;
