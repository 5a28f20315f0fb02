// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::render;
use crate::export::{ReportFormat, notify_export_success};
use crate::models::coverage::CoverageReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes coverage reports to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `path` as JSON, YAML or CSV.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(report: &CoverageReport, format: ReportFormat, path: &Path, force: bool) -> AppResult<()> {
        if format == ReportFormat::Table {
            return Err(AppError::InvalidExportFormat(format.as_str().to_string()));
        }

        ensure_writable(path, force)?;

        let label = format.as_str().to_uppercase();
        info(format!("Exporting to {label}: {}", path.display()));

        let data = render(report, format)?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;

        notify_export_success(&label, path);
        Ok(())
    }
}
