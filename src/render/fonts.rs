// src/render/fonts.rs
use crate::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use std::path::Path;
use tracing::info;

/// Face suffixes genpdf expects next to the family name, e.g.
/// `Inter-Regular.ttf`.
const FACES: [&str; 4] = ["Regular", "Bold", "Italic", "BoldItalic"];

/// Load the four-face TrueType family from `dir`. Every face file is checked
/// up front so a missing asset fails before any output path is touched.
pub fn load_family(dir: &Path, family: &str) -> Result<FontFamily<FontData>, Error> {
    for face in FACES {
        let path = dir.join(format!("{}-{}.ttf", family, face));
        if !path.exists() {
            return Err(Error::FontAsset { path });
        }
    }

    let loaded = genpdf::fonts::from_files(dir, family, None).map_err(|source| Error::FontLoad {
        family: family.to_string(),
        source,
    })?;
    info!("loaded font family {} from {}", family, dir.display());
    Ok(loaded)
}
