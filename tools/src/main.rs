use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use svgpath::Point;
mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read path data from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "data")]
    filename: Option<PathBuf>,

    /// Path data given inline, read from stdin when neither this nor a file is set
    #[arg(short, long, allow_hyphen_values = true)]
    data: Option<String>,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    start_x: f64,
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    start_y: f64,
}

#[derive(Parser, Debug)]
enum Commands {
    Tokens(commands::tokens::Config),
    Segments(commands::segments::Config),
}

fn read_input(cli: &Cli) -> std::io::Result<String> {
    if let Some(data) = &cli.data {
        return Ok(data.to_owned());
    }
    match &cli.filename {
        Some(filename) => std::fs::read_to_string(filename),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let data = match read_input(&cli) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read path data: {}", e);
            process::exit(1);
        }
    };
    let start = Point::new(cli.start_x, cli.start_y);
    info!("Process {} bytes of path data from {:?}", data.len(), start);

    let result = match cli.command {
        Commands::Tokens(cfg) => commands::tokens::command(&data, cfg),
        Commands::Segments(cfg) => commands::segments::command(&data, start, cfg),
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
