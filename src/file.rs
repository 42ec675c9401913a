// src/file.rs

use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::core::sanitize::is_valid_filename;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::progress::Progress;
use crate::render;

/// Outcome of one export batch.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, Error)>,
}

/// Write up to `export.max_files` pages into `export.out_dir`, one file per
/// item, named after the item. A failing item is reported and skipped.
pub fn export_pages(
    export: &ExportOptions,
    items: &[Item],
    progress: &mut dyn Progress,
) -> ExportReport {
    let mut report = ExportReport::default();
    let batch = &items[..items.len().min(export.max_files)];
    if batch.is_empty() {
        return report;
    }

    progress.begin(batch.len());
    match ensure_directory(&export.out_dir) {
        Ok(true) => progress.log(&format!("Created folder {}", export.out_dir.display())),
        Ok(false) => {}
        // Keep going; each write below reports its own failure.
        Err(e) => progress.log(&format!("Folder {} was not created: {e}", export.out_dir.display())),
    }

    let mut seen: HashSet<String> = HashSet::new();
    for item in batch {
        let name = s!(item.name_or_empty());
        let result = page_path(&export.out_dir, item).and_then(|path| {
            if !seen.insert(name.clone()) {
                return Err(Error::AlreadyExists(path));
            }
            progress.log(&format!("Writing file {}...", path.display()));
            write_page(&path, &render::render(item), export.overwrite)
        });
        match result {
            Ok(path) => {
                logf!("Wrote {}", path.display());
                progress.item_done(&name, &path);
                report.written.push(path);
            }
            Err(e) => {
                loge!("Export of {:?} failed: {}", name, e);
                progress.item_failed(&name, &e);
                report.failed.push((name, e));
            }
        }
    }
    progress.finish();
    report
}

/// `<dir>/<item name>`, after checking the name is usable as a file name.
pub fn page_path(dir: &Path, item: &Item) -> Result<PathBuf> {
    let name = item.name.as_deref().ok_or(Error::MissingName)?;
    if !is_valid_filename(name) {
        return Err(Error::InvalidFileName(s!(name)));
    }
    Ok(dir.join(name))
}

/// Write `text` to `path`. Without `overwrite`, an existing file is an error.
pub fn write_page(path: &Path, text: &str, overwrite: bool) -> Result<PathBuf> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    let mut file = opts.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists(path.to_path_buf()),
        _ => Error::io(path, e),
    })?;
    file.write_all(text.as_bytes()).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

/// Create `dir` if needed. Returns whether it was created.
pub fn ensure_directory(dir: &Path) -> Result<bool> {
    if dir.as_os_str().is_empty() {
        return Ok(false);
    }
    if dir.exists() {
        if !dir.is_dir() {
            return Err(Error::io(dir, io::Error::other("path exists but is not a directory")));
        }
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    Ok(true)
}
