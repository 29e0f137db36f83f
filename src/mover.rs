// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! File relocation into per-game folders with normalized names

use std::path::Path;
use tracing::{debug, error, warn};

use crate::scanner::AppGroup;
use crate::{Result, ShotsortError};

/// Outcome counts for one relocated group
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveReport {
    pub moved: usize,
    pub conflicts: usize,
    pub failed: usize,
}

/// Rewrite raw timestamp digits into `YYYY-MM-DD_HH-MM-SS` form.
///
/// Digits beyond position 12 (seconds plus any capture-tool suffix) are
/// appended verbatim. The caller guarantees at least 12 ASCII digits;
/// numeric ranges are deliberately not validated.
pub fn normalize_timestamp(digits: &str) -> String {
    format!(
        "{}-{}-{}_{}-{}-{}",
        &digits[0..4],
        &digits[4..6],
        &digits[6..8],
        &digits[8..10],
        &digits[10..12],
        &digits[12..],
    )
}

/// Move every file in `group` into `root/folder`, renaming each into its
/// normalized timestamp form. An existing destination is never overwritten;
/// the source stays put and the conflict is reported.
pub fn relocate(root: &Path, folder: &str, group: &AppGroup) -> Result<MoveReport> {
    let dest_dir = root.join(folder);
    std::fs::create_dir_all(&dest_dir)?;

    let mut report = MoveReport::default();

    for file in &group.files {
        let name = format!("{}.{}", normalize_timestamp(&file.timestamp), file.extension);
        let dest = dest_dir.join(name);

        if dest.exists() {
            warn!(
                "App id {}: {}",
                group.app_id,
                ShotsortError::DestinationConflict {
                    src: file.path.clone(),
                    dest,
                }
            );
            report.conflicts += 1;
            continue;
        }

        match std::fs::rename(&file.path, &dest) {
            Ok(()) => {
                debug!("Moved {:?} -> {:?}", file.path, dest);
                report.moved += 1;
            }
            Err(e) => {
                error!("Failed to move {:?} -> {:?}: {}", file.path, dest, e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
