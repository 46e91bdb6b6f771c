//! Certificate list export and validating import.
//!
//! Import never merges into the shared store; the surviving records are
//! returned to the caller, invalid ones dropped and counted.

use crate::error::TransferError;
use crate::model::Certificate;
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Serialize `certificates` as indented JSON into
/// `certificates-export-YYYY-MM-DD.json` under `dir`.
///
/// An empty list is refused before anything touches the filesystem.
pub fn export_certificates(
    certificates: &[Certificate],
    dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf, TransferError> {
    if certificates.is_empty() {
        return Err(TransferError::NothingToExport);
    }

    let path = dir.join(format!(
        "certificates-export-{}.json",
        today.format("%Y-%m-%d")
    ));
    let json = serde_json::to_string_pretty(certificates)?;
    fs::create_dir_all(dir)?;
    fs::write(&path, json)?;

    info!(path = %path.display(), count = certificates.len(), "certificates exported");
    Ok(path)
}

/// Outcome of an import: the surviving records plus what was dropped and why.
#[derive(Debug)]
pub struct ImportReport {
    pub certificates: Vec<Certificate>,
    pub skipped: usize,
    pub reasons: Vec<String>,
}

/// Parse and validate a certificate JSON file.
///
/// The file must hold a JSON array. Each element needs non-empty `id`,
/// `name`, `provider` and `userId` fields and well-formed dates; anything
/// else is skipped with a recorded reason rather than aborting the import.
pub fn import_certificates(path: &Path) -> Result<ImportReport, TransferError> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let Value::Array(entries) = value else {
        return Err(TransferError::NotAnArray);
    };

    let mut certificates = Vec::with_capacity(entries.len());
    let mut reasons = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        match validate_entry(&entry) {
            Ok(cert) => certificates.push(cert),
            Err(reason) => {
                warn!(index, %reason, "import entry skipped");
                reasons.push(format!("entry {index}: {reason}"));
            }
        }
    }

    info!(
        accepted = certificates.len(),
        skipped = reasons.len(),
        "certificates imported"
    );
    Ok(ImportReport {
        certificates,
        skipped: reasons.len(),
        reasons,
    })
}

fn validate_entry(entry: &Value) -> Result<Certificate, String> {
    if !entry.is_object() {
        return Err("not an object".to_string());
    }

    // Check the required identity fields up front so the reason names the
    // field instead of surfacing a serde type error.
    for field in ["id", "name", "provider", "userId"] {
        match entry.get(field).and_then(Value::as_str) {
            Some(value) if !value.trim().is_empty() => {}
            _ => return Err(format!("missing or empty required field `{field}`")),
        }
    }

    serde_json::from_value(entry.clone()).map_err(|error| error.to_string())
}
