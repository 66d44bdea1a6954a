use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

/// Marker argument that selects stdin instead of a file.
pub const STDIN_ARG: &str = "-";

/// Reads a positional input: the named file, or all of stdin for `-`.
pub fn read_input(arg: &str) -> anyhow::Result<String> {
    if arg == STDIN_ARG {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        Ok(text)
    } else {
        read_file(Path::new(arg))
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
