// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;
pub mod model;
pub mod transform;

pub use logic::ExportLogic;
pub use model::{CALENDAR_HEADERS, CalendarRow, JoinedInstanceRow};

use crate::ui::messages::success;
use std::path::Path;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "calendar.csv";

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
