//! CLI command implementations.

pub(crate) mod extract;
pub(crate) mod payload;
pub(crate) mod render;

use std::io::Write as _;
use std::path::Path;

pub(crate) use extract::ExtractArgs;
pub(crate) use payload::PayloadArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read the input file, or stdin when no file is given.
pub(crate) fn read_source(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

/// Write `text` and a trailing newline to stdout.
pub(crate) fn write_stdout(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_read_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.md");
        std::fs::write(&path, "# hi\n").unwrap();
        assert_eq!(read_source(Some(&path)).unwrap(), "# hi\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        assert!(read_source(Some(Path::new("/nonexistent/input.md"))).is_err());
    }
}
