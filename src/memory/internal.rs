//! Internal implementation for the memory module

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::dream::InsightRecord;
use crate::error::DreamError;

const INDENT: &[u8] = b"    ";

fn encode(records: &[InsightRecord]) -> Result<Vec<u8>, DreamError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    Ok(buf)
}

pub fn to_json(records: &[InsightRecord]) -> Result<String, DreamError> {
    let bytes = encode(records)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn save(records: &[InsightRecord], path: &Path) -> Result<(), DreamError> {
    let bytes = encode(records)?;

    let mut file = File::create(path).map_err(|e| DreamError::io(path, e))?;
    file.write_all(&bytes).map_err(|e| DreamError::io(path, e))?;
    file.flush().map_err(|e| DreamError::io(path, e))?;

    info!(
        path = %path.display(),
        records = records.len(),
        "Memory saved to {}",
        path.display()
    );
    Ok(())
}
