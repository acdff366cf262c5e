// src/loader.rs
use crate::error::Error;
use crate::types::{CoverLetterDocument, ResumeDocument};
use std::path::Path;
use tracing::info;

/// Top-level keys the cover letter schema cannot do without.
const COVER_LETTER_REQUIRED: [&str; 2] = ["applicant", "document"];

/// Load a resume document. Every section is optional; missing ones are
/// simply absent from the rendered output.
pub fn load_resume(path: &Path) -> Result<ResumeDocument, Error> {
    let raw = read_input(path)?;
    let resume = serde_json::from_str(&raw).map_err(|source| Error::parse(path, source))?;
    info!("loaded resume from {}", path.display());
    Ok(resume)
}

/// Load a cover letter document. The `applicant` and `document` keys are
/// required and checked before typed decoding so their absence reports as a
/// missing field rather than a generic parse failure.
pub fn load_cover_letter(path: &Path) -> Result<CoverLetterDocument, Error> {
    let raw = read_input(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| Error::parse(path, source))?;

    for field in COVER_LETTER_REQUIRED {
        if value.get(field).is_none() {
            return Err(Error::missing_field(field, path));
        }
    }

    let letter = serde_json::from_value(value).map_err(|source| Error::parse(path, source))?;
    info!("loaded cover letter from {}", path.display());
    Ok(letter)
}

fn read_input(path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    std::fs::read_to_string(path)
        .map_err(|source| Error::io(format!("failed to read {}", path.display()), source))
}
