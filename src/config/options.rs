// src/config/options.rs
use std::{fs, io, path::{Path, PathBuf}};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(API_URL),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Folder pages are written to.
    pub out_dir: PathBuf,
    /// Files written per query; 0 disables writing.
    pub max_files: usize,
    /// Pages printed when a query matches several distinct items.
    pub display_limit: usize,
    pub hide_output: bool,
    /// Copy the last rendered page (needs the `clipboard` feature).
    pub clipboard: bool,
    pub overwrite: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            max_files: MAX_FILES,
            display_limit: DISPLAY_LIMIT,
            hide_output: false,
            clipboard: false,
            overwrite: true,
        }
    }
}

/// Load options from a TOML file. A missing file yields defaults.
pub fn load(path: &Path) -> Result<AppOptions> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(AppOptions::default());
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    parse(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
}

pub fn parse(text: &str) -> std::result::Result<AppOptions, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let p = std::env::temp_dir().join("wiki_item_no_such_config.toml");
        let _ = fs::remove_file(&p);
        assert_eq!(load(&p).unwrap(), AppOptions::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let opts = parse("[export]\nmax_files = 3\nhide_output = true\n").unwrap();
        assert_eq!(opts.export.max_files, 3);
        assert!(opts.export.hide_output);
        assert_eq!(opts.export.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(opts.source, SourceOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let p = std::env::temp_dir().join("wiki_item_bad_config.toml");
        fs::write(&p, "[export\nmax_files = ").unwrap();
        assert!(matches!(load(&p), Err(Error::Config { .. })));
    }
}
