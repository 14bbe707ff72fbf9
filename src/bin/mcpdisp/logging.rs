use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// `$HOME/.local/share/mcpdisp/logs/mcpdisp.log`
fn default_log_path() -> EyreResult<PathBuf> {
    let home = std::env::var("HOME").wrap_err("HOME environment variable not set")?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("mcpdisp")
        .join("logs")
        .join("mcpdisp.log"))
}

/// Send `log` output to a file. The terminal belongs to the UI.
pub fn init_logger(path: Option<PathBuf>, level: &str) -> EyreResult<PathBuf> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| eyre!("unknown log level {level:?}"))?;
    let path = match path {
        Some(path) => path,
        None => default_log_path()?,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("can't create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("can't open log file {}", path.display()))?;

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, file).wrap_err("logger already installed")?;

    Ok(path)
}
