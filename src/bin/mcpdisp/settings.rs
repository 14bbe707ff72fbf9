//! Runtime settings: defaults, optional config file, then CLI overrides.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use config::Config;
use serde::Deserialize;

use mcpdisp::{surface::DisplayMode, transport::DEFAULT_QUEUE_CAPACITY};

/// Smallest queue accepted from configuration.
const MIN_QUEUE_CAPACITY: usize = 256;

/// Mackie Control display emulator for JACK
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Master unit: also show transport, assignment and timecode
    #[arg(short, long)]
    pub master: bool,

    /// Show timecode (master only)
    #[arg(short = 't', long = "time")]
    pub show_timecode: bool,

    /// Settings file (any format the `config` crate reads)
    #[arg(short, long)]
    pub config: Option<String>,

    /// JACK client name
    #[arg(long)]
    pub client_name: Option<String>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    /// Client name for a master unit.
    pub client_name: String,
    /// Client name for an extender unit.
    pub extender_client_name: String,
    pub queue_capacity: usize,
    pub poll_interval_ms: u64,
    /// Poll ticks per meter decay step.
    pub decay_ticks: u8,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub master: bool,
    pub show_timecode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_name: "mcpdisp".to_string(),
            extender_client_name: "mcpdisp-ext".to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            poll_interval_ms: 15,
            decay_ticks: 10,
            log_level: "info".to_string(),
            log_file: None,
            master: false,
            show_timecode: false,
        }
    }
}

impl Settings {
    /// Build settings from the optional file named in `args`, then apply
    /// the command line on top.
    pub fn load(args: &Args) -> EyreResult<Self> {
        let mut cfg = Config::builder();

        if let Some(path) = &args.config {
            cfg = cfg.add_source(config::File::with_name(path));
        }

        let mut settings: Settings = cfg
            .build()
            .wrap_err("can't read settings")?
            .try_deserialize()
            .wrap_err("can't parse settings")?;

        settings.apply_args(args);
        settings.validate()?;
        Ok(settings)
    }

    fn apply_args(&mut self, args: &Args) {
        self.master |= args.master;
        self.show_timecode |= args.show_timecode;

        if let Some(name) = &args.client_name {
            if self.master {
                self.client_name = name.clone();
            } else {
                self.extender_client_name = name.clone();
            }
        }
        if let Some(path) = &args.log_file {
            self.log_file = Some(path.clone());
        }
    }

    pub fn validate(&self) -> EyreResult<()> {
        if self.client_name.is_empty() || self.extender_client_name.is_empty() {
            bail!("client names must not be empty");
        }
        if self.queue_capacity < MIN_QUEUE_CAPACITY {
            bail!(
                "queue_capacity must be at least {MIN_QUEUE_CAPACITY} bytes (found {})",
                self.queue_capacity
            );
        }
        if self.poll_interval_ms == 0 {
            bail!("poll_interval_ms must be positive");
        }
        if self.decay_ticks == 0 {
            bail!("decay_ticks must be positive");
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            bail!("unknown log_level {:?}", self.log_level);
        }
        Ok(())
    }

    /// Timecode is dropped without master mode.
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::new(self.master, self.show_timecode)
    }

    /// JACK client name for the selected mode.
    pub fn jack_client_name(&self) -> &str {
        if self.master {
            &self.client_name
        } else {
            &self.extender_client_name
        }
    }
}
