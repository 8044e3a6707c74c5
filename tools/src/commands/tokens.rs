use clap::Parser;

use svgpath::error::Result;
use svgpath::lexer::Tokenizer;

#[derive(Debug, Parser)]
pub struct Config {}

pub fn command(data: &str, _cfg: Config) -> Result<()> {
    for (pos, token) in Tokenizer::new(data) {
        println!("{}\t{:?}", pos, token);
    }
    Ok(())
}
