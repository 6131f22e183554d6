use crate::core::RawName;
use crate::utils::error::Result;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Reads every line of `reader` as a trimmed name, in order. Blank lines are kept.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; a final line break does not start a new one.
pub fn read_names<R: Read>(mut reader: R) -> Result<Vec<RawName>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut lines: Vec<&str> = LINE_BREAK.split(&text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    Ok(lines.into_iter().map(RawName::new).collect())
}

pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<RawName>> {
    let path = path.as_ref();
    tracing::debug!("Reading names from: {}", path.display());
    let file = File::open(path)?;
    let names = read_names(file)?;
    tracing::debug!("Read {} names", names.len());
    Ok(names)
}
