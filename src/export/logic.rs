// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_joined_instances;
use crate::errors::AppResult;
use crate::export::csv::write_calendar;
use crate::export::fs_utils::{create_output, ensure_writable};
use crate::export::notify_export_success;
use crate::export::transform::to_calendar_rows;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High-level calendar export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every instance to `file` as a calendar CSV.
    ///
    /// Every row is converted before the output file is touched, so a bad
    /// timestamp leaves no partial file behind. Returns the number of rows
    /// written.
    pub fn export(pool: &DbPool, file: &Path, force: bool) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let joined = load_joined_instances(&pool.conn)?;
        tracing::debug!(rows = joined.len(), "loaded joined instances");

        let rows = to_calendar_rows(&joined)?;

        if rows.is_empty() {
            warning("No instances found. Writing header only.");
        }

        info(format!("Exporting to CSV: {}", file.display()));
        let out = create_output(file)?;
        write_calendar(out, &rows)?;

        notify_export_success("Calendar CSV", file);
        Ok(rows.len())
    }
}
