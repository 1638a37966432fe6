use anyhow::{Context, Result};
use std::io::Write;

use crate::color::cmap::ColorTable;

/// Prefix for the per-tempo constants, followed by the BPM
const ID_PREFIX: &str = "bpmcolor";
/// The C struct every entry is declared as
const STRUCT_NAME: &str = "color_24bits";
/// The lookup array the firmware indexes by BPM
const LIST_NAME: &str = "BPM_COLOR_LIST";

/// Writes the table as C source for the metronome firmware.
///
/// Entries are placed in flash with `PROGMEM` and collected into an array of
/// pointers so the firmware can look a color up by BPM.
pub fn write_table<W: Write>(table: &ColorTable, out: &mut W) -> Result<()> {
    write_header(out).context("Error while writing header")?;

    for (bpm, color) in table.iter() {
        writeln!(
            out,
            "const struct {} {}{} PROGMEM = {{ {}, {}, {} }};",
            STRUCT_NAME, ID_PREFIX, bpm, color.r, color.g, color.b
        )
        .with_context(|| format!("Error while writing entry for {} BPM", bpm))?;
    }

    write_list(table, out).context("Error while writing lookup list")?;

    out.flush().context("Error while flushing output")?;

    log::info!("Wrote {} colors", table.len());

    Ok(())
}

fn write_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "// LCD Backlight Table, based on BPMs")?;
    writeln!(out, "// Generated by bpm-colormap...easier to edit that")?;
    writeln!(out)?;
    writeln!(out, "/* Structure for defining a color */")?;
    writeln!(out, "struct {} {{", STRUCT_NAME)?;
    writeln!(out, "    uint8_t red_value;")?;
    writeln!(out, "    uint8_t green_value;")?;
    writeln!(out, "    uint8_t blue_value;")?;
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out)
}

fn write_list<W: Write>(table: &ColorTable, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "PROGMEM const struct {} * {}[] = {{", STRUCT_NAME, LIST_NAME)?;

    for (bpm, _) in table.iter() {
        writeln!(out, "    &{}{},", ID_PREFIX, bpm)?;
    }

    writeln!(out, "}};")
}
