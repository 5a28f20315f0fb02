// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use json_csv::render;
pub use logic::ExportLogic;
pub use model::IntervalRow;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared success line for finished exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Yaml,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Csv => "csv",
        }
    }

    /// Parse a format name as written in the config file.
    pub fn from_name(name: &str) -> AppResult<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| AppError::InvalidExportFormat(name.to_string()))
    }
}
