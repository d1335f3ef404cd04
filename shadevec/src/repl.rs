//! Interactive read-convert-print loop.

use std::io::{BufRead, Write};

use crate::color;
use crate::error::Result;

/// Banner written once at startup.
pub const USAGE: &str = "Usage: at # prompt, enter 6-digit hex code or nothing to quit";

/// Prompt written before each read, with no trailing space or newline.
pub const PROMPT: &str = "#";

/// Drive the prompt loop until the user enters an empty line or the input
/// stream ends.
///
/// Each non-empty line is parsed as a hex color code and answered with a
/// `vec3(...)` line. A line that fails to parse aborts the loop with
/// [`crate::Error::InvalidHexCode`]; there is no retry.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "{USAGE}")?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Stream closed (piped input or ^D): same as an empty line.
            break;
        }

        let code = line.trim();
        if code.is_empty() {
            break;
        }

        let value = color::parse_hex(code)?;
        tracing::debug!("parsed '{}' as 0x{:06X}", code, value);

        writeln!(output, "{}", color::vec3_literal(color::channels(value)))?;
    }

    Ok(())
}
