//! Single-shot artifact writes.

use std::fs;
use std::path::Path;

use log::info;

use crate::OutputResult;

/// Write a fully rendered artifact to `path`, truncating any existing file.
pub fn write_artifact(path: &Path, contents: impl AsRef<[u8]>) -> OutputResult<()> {
    let contents = contents.as_ref();
    fs::write(path, contents)?;
    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
