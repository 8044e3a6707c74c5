pub mod path;
pub mod point;
pub mod segment;
