// src/clipboard.rs
use crate::error::{Error, Result};

#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> Result<()> {
    let mut cb = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    cb.set_text(text).map_err(|e| Error::Clipboard(e.to_string()))?;
    logd!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> Result<()> {
    Err(Error::Clipboard(s!("built without the `clipboard` feature")))
}
