pub mod segments;
pub mod tokens;
