//! Database serialization helpers (made by FontLab https://www.fontlab.com/)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::database::FontDatabase;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "google_fonts_db.json";

/// Write a value as two-space indented JSON.
pub fn write_json_pretty<T: Serialize + ?Sized>(value: &T, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write items as newline-delimited JSON (NDJSON).
pub fn write_ndjson<T: Serialize>(items: &[T], mut w: impl Write) -> Result<()> {
    for item in items {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Replace the file at `path` with the serialized database.
///
/// The document is rendered in memory before the file is touched, so a
/// serialization failure leaves any existing artifact intact.
pub fn write_database(db: &FontDatabase, path: &Path) -> Result<()> {
    let mut rendered = Vec::new();
    write_json_pretty(db, &mut rendered)?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create font database {}", path.display()))?;
    file.write_all(&rendered)
        .with_context(|| format!("failed to write font database {}", path.display()))?;

    info!(path = %path.display(), bytes = rendered.len(), "wrote font database");
    Ok(())
}
