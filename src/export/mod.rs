pub mod csv_export;
pub mod document;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;

pub use csv_export::write_shopping_csv;
pub use document::{PAGE_BREAK, PagedDocument, shopping_list_document};
pub use text::{plan_report, shopping_list_text};

/// Write an export to a file, or to stdout when the path is `-`.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.txt");
        write_output(&path, b"1 cup of Coffee\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 cup of Coffee\n");
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("list.txt");
        assert!(write_output(&path, b"x").is_err());
    }
}
