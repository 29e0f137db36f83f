// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Screenshot directory scanning and grouping by app id

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::{Result, ShotsortError};

/// One screenshot, parsed from its filename
///
/// Steam names captures `<app id>_<timestamp digits>.<ext>`, where the
/// digits are `YYYYMMDDHHMMSS` plus an optional trailing sequence number.
#[derive(Debug, Clone)]
pub struct ScreenshotFile {
    pub path: PathBuf,
    pub app_id: String,
    /// Raw timestamp digits, at least 12 of them.
    pub timestamp: String,
    pub extension: String,
}

/// All screenshots sharing one app id, in ascending filename order
#[derive(Debug, Clone)]
pub struct AppGroup {
    pub app_id: String,
    pub files: Vec<ScreenshotFile>,
}

/// Parse a screenshot path into its app id, timestamp digits, and extension.
pub fn parse_filename(path: &Path) -> Result<ScreenshotFile> {
    let malformed = |reason| ShotsortError::MalformedFilename {
        path: path.to_path_buf(),
        reason,
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or(malformed("filename is not valid UTF-8"))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(malformed("missing file extension"))?
        .to_string();

    let (app_id, timestamp) = stem
        .split_once('_')
        .ok_or(malformed("no `_` separator in filename"))?;

    if app_id.is_empty() {
        return Err(malformed("empty app id before `_`"));
    }
    if !timestamp.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed("timestamp contains non-digit characters"));
    }
    if timestamp.len() < 12 {
        return Err(malformed("timestamp shorter than 12 digits"));
    }

    Ok(ScreenshotFile {
        path: path.to_path_buf(),
        app_id: app_id.to_string(),
        timestamp: timestamp.to_string(),
        extension,
    })
}

/// Enumerate screenshots in `dir` and group them by app id.
///
/// Groups come back in order of first appearance in the sorted listing;
/// files within a group keep ascending filename order. Subdirectories are
/// never entered, so an already-organized tree yields nothing to do.
pub fn scan(dir: &Path, extension: &str) -> Result<Vec<AppGroup>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();

    if paths.is_empty() {
        return Err(ShotsortError::EmptyDirectory(dir.to_path_buf()));
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut groups: Vec<AppGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for path in paths {
        let file = match parse_filename(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Skipping unparseable file: {}", e);
                continue;
            }
        };

        match index.get(&file.app_id) {
            Some(&i) => groups[i].files.push(file),
            None => {
                index.insert(file.app_id.clone(), groups.len());
                groups.push(AppGroup {
                    app_id: file.app_id.clone(),
                    files: vec![file],
                });
            }
        }
    }

    Ok(groups)
}
