use std::io::{self, BufWriter};

use anyhow::Result;
use simple_logger::SimpleLogger;

mod codegen;
mod color;

use color::cmap::ColorTable;

// Output is pasted straight into metronome.h, so it goes to stdout and the
// logs go to stderr.
fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let table = ColorTable::build();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    codegen::write_table(&table, &mut out)?;

    Ok(())
}
