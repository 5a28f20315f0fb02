use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ReportFormat, render};
use crate::models::coverage::{CoverageReport, Interval};
use crate::models::resume::{Resume, ResumeLike};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_kind, color_for_pct, paint};
use crate::utils::date::{format_date, today};
use crate::utils::days2readable;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::path::Path;

/// High-level business logic for the `analyze` command.
pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Load `resume_path`, analyze it as of `as_of` (today when `None`) and
    /// print or export the report.
    pub fn run(
        resume_path: &Path,
        format: ReportFormat,
        file: Option<&Path>,
        force: bool,
        as_of: Option<NaiveDate>,
        cfg: &Config,
    ) -> AppResult<CoverageReport> {
        let resume = Resume::from_path(resume_path)?;
        let now = as_of.unwrap_or_else(today);

        tracing::info!(resume = %resume_path.display(), %now, "analyzing employment history");
        let report = Core::analyze_employment_coverage_at(&resume, now)?;

        match file {
            Some(path) => ExportLogic::export(&report, format, path, force)?,
            None if format == ReportFormat::Table => print_table(&resume, &report, now, cfg),
            None => println!("{}", render(&report, format)?),
        }

        Ok(report)
    }
}

fn print_table(resume: &Resume, report: &CoverageReport, now: NaiveDate, cfg: &Config) {
    let title = resume.name.as_deref().unwrap_or("Employment coverage");
    header(title, cfg.color);

    let jobs = resume.employment_history().map(|h| h.len()).unwrap_or(0);
    if jobs == 0 {
        info("No employment history found.");
    }

    let mut table = Table::new(vec![
        Column::new("Kind"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Days"),
        Column::new("Approx."),
    ]);

    for (kind, list) in [("gap", report.gaps()), ("overlap", report.overlaps())] {
        for iv in list {
            table.add_row(interval_row(kind, iv, cfg));
        }
    }

    if table.is_empty() {
        println!("No gaps or overlaps.\n");
    } else {
        println!("{}", table.render());
    }

    let duration = report.duration();
    let pct_colour = color_for_pct(report.pct_value());

    println!(
        "{} {}",
        bold("As of:   ", cfg.color),
        format_date(now, &cfg.date_format)
    );
    println!("{} {}", bold("Jobs:    ", cfg.color), jobs);
    println!("{} {} days", bold("Tracked: ", cfg.color), duration.total);
    println!("{} {} days", bold("Gaps:    ", cfg.color), duration.gaps);
    println!("{} {} days", bold("Overlap: ", cfg.color), duration.work);
    println!(
        "{} {}",
        bold("Coverage:", cfg.color),
        paint(report.pct(), pct_colour, cfg.color)
    );
}

fn interval_row(kind: &str, iv: &Interval, cfg: &Config) -> Vec<String> {
    let mut end = format_date(iv.end, &cfg.date_format);
    if iv.ongoing {
        end.push_str(" (ongoing)");
    }

    vec![
        paint(kind, color_for_kind(kind), cfg.color),
        format_date(iv.start, &cfg.date_format),
        end,
        iv.duration.to_string(),
        days2readable(iv.duration),
    ]
}
