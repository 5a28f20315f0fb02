// src/export/json_csv.rs

use super::ReportFormat;
use super::model::report_to_rows;
use crate::errors::{AppError, AppResult};
use crate::models::coverage::CoverageReport;

/// Serialize the report in a machine-readable format.
///
/// `Table` is a terminal rendering and is refused here.
pub fn render(report: &CoverageReport, format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Csv => render_csv(report),
        ReportFormat::Table => Err(AppError::InvalidExportFormat(
            format.as_str().to_string(),
        )),
    }
}

/// CSV with a header row (from serde) and one row per gap / overlap.
fn render_csv(report: &CoverageReport) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in report_to_rows(report) {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
