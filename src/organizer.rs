// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! The sorting pipeline: scan, resolve, relocate

use std::path::Path;
use tracing::{error, info};

use crate::mover::relocate;
use crate::overrides::OverrideTable;
use crate::resolver::{AppLookup, Resolver};
use crate::scanner::scan;
use crate::{Result, ShotsortError};

/// Counts for one complete run
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Screenshots found by the scan
    pub files: usize,
    /// Distinct app ids observed
    pub games: usize,
    pub moved: usize,
    pub conflicts: usize,
    /// Files left in place because their group could not be resolved
    pub skipped: usize,
}

/// Sort every screenshot under `root` into per-game folders.
///
/// Groups are handled strictly in first-seen order, one at a time. A group
/// whose app id cannot be resolved is skipped whole; a file whose
/// destination exists is skipped alone. Nothing here aborts the run.
pub async fn run(
    root: &Path,
    extension: &str,
    overrides: &OverrideTable,
    lookup: &dyn AppLookup,
) -> Result<RunSummary> {
    let groups = match scan(root, extension) {
        Ok(groups) => groups,
        Err(ShotsortError::EmptyDirectory(dir)) => {
            info!("No screenshots found in {:?}, nothing to do", dir);
            return Ok(RunSummary::default());
        }
        Err(e) => return Err(e),
    };

    let mut summary = RunSummary {
        files: groups.iter().map(|g| g.files.len()).sum(),
        games: groups.len(),
        ..RunSummary::default()
    };

    info!("Found {} screenshots to sort", summary.files);
    info!("Identified {} different games", summary.games);

    let resolver = Resolver::new(overrides, lookup);

    for (i, group) in groups.iter().enumerate() {
        let record = match resolver.resolve(&group.app_id).await {
            Ok(record) => record,
            Err(e) => {
                error!("{}", e);
                error!("Attempted app id was `{}`", group.app_id);
                summary.skipped += group.files.len();
                continue;
            }
        };

        info!("{}/{}: {}", i + 1, summary.games, record.name);

        match relocate(root, &record.folder_name(), group) {
            Ok(report) => {
                summary.moved += report.moved;
                summary.conflicts += report.conflicts;
            }
            Err(e) => {
                error!("Could not relocate group for `{}`: {}", group.app_id, e);
                summary.skipped += group.files.len();
            }
        }
    }

    Ok(summary)
}
