//! Serialization of an [`OutputTree`] into a ZIP bundle or a directory.

use std::io::{Cursor, Write};
use std::path::Path;

use tracing::debug;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::IconResult;
use crate::tree::OutputTree;

/// Default file name for the downloadable bundle.
pub const DEFAULT_ARCHIVE_NAME: &str = "icons.zip";

/// Packs the tree into an in-memory ZIP archive.
///
/// Folder entries are written before the files they contain. PNG data is
/// already compressed, so entries are stored as-is.
pub fn to_zip(tree: &OutputTree) -> IconResult<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o644);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for dir in tree.directories() {
        writer.add_directory(dir.as_str(), options.unix_permissions(0o755))?;
    }
    for (path, bytes) in tree.iter() {
        writer.start_file(path, options)?;
        writer.write_all(bytes)?;
    }

    let bytes = writer.finish()?.into_inner();
    debug!(entries = tree.len(), size = bytes.len(), "wrote archive");
    Ok(bytes)
}

/// Writes every entry under `root`, creating folders as needed.
pub fn write_dir(tree: &OutputTree, root: impl AsRef<Path>) -> IconResult<()> {
    let root = root.as_ref();
    for (path, bytes) in tree.iter() {
        let target = path
            .split('/')
            .fold(root.to_path_buf(), |acc, part| acc.join(part));
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, bytes)?;
    }
    debug!(entries = tree.len(), root = %root.display(), "wrote directory");
    Ok(())
}
