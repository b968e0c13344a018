//! Output Writer

use pdhgen_core::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Create or truncate `path` and write `text` to it in full.
///
/// The file is closed before this returns, on success and on error.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::file_write(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::file_write(path, e))?;

    debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("defs_pdh_windows.rs");

        write_output(&path, "pub type PdhErrno = u32;\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "pub type PdhErrno = u32;\n");
    }

    #[test]
    fn test_write_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("defs_pdh_windows.rs");
        fs::write(&path, "stale content that is much longer than the new text\n").unwrap();

        write_output(&path, "fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_write_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no/such/dir/defs.rs");

        let err = write_output(&path, "x").unwrap_err();
        match err {
            Error::FileWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
