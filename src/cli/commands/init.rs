use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory and writes a default configuration file.
/// In test mode the file is left untouched.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing gapinspect…");

    let cfg = Config::init_at(path, cli.test)?;

    println!("📄 Config file : {}", path.display());
    println!("🗂️  Format     : {}", cfg.default_format);

    success("gapinspect initialization completed!");
    Ok(())
}
