use clap::Parser;
use log::info;

use svgpath::error::Result;
use svgpath::{parse_path, Point, Segment};

#[derive(Debug, Parser)]
pub struct Config {
    /// Only print segment counts and the closed flag
    #[arg(short, long)]
    pub(crate) summary: bool,
}

pub fn command(data: &str, start: Point, cfg: Config) -> Result<()> {
    let path = parse_path(data, Some(start))?;
    info!("parsed {} segments", path.len());
    if cfg.summary {
        let subpaths = path.iter().filter(|s| s.is_move()).count();
        let curves = path
            .iter()
            .filter(|s| matches!(s, Segment::CubicBezier(_) | Segment::QuadraticBezier(_)))
            .count();
        println!(
            "segments:{} subpaths:{} curves:{} closed:{}",
            path.len(),
            subpaths,
            curves,
            path.is_closed()
        );
        return Ok(());
    }
    for (i, segment) in path.iter().enumerate() {
        println!("{}\t{:?}", i, segment);
    }
    println!("closed:{}", path.is_closed());
    Ok(())
}
