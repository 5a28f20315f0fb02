use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::errors::AppResult;
use crate::export::ReportFormat;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;

/// Handle the `analyze` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        resume,
        format,
        file,
        force,
        as_of,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => ReportFormat::from_name(&cfg.default_format)?,
        };

        let as_of = as_of.as_deref().map(parse_date).transpose()?;
        let out = file.as_deref().map(expand_tilde);

        AnalyzeLogic::run(
            &expand_tilde(resume),
            format,
            out.as_deref(),
            *force,
            as_of,
            cfg,
        )?;
    }
    Ok(())
}
