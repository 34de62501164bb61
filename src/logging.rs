use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

/// Logger setup.
///
/// Prompts own the terminal while they run, so a log file is the usual
/// target. Without a file, records go to stderr.
///
/// The level can be raised after [`Logging::start`] with
/// [`Logging::set_debug_mode`], unless `RUST_LOG` is set.
#[derive(Debug, Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Setup for a process that runs prompts.
    ///
    /// Records go to `file_name` unless `verbose` is set and stderr is not
    /// the terminal the prompts draw on. `verbose` also enables debug records.
    #[must_use]
    pub fn for_prompts<P>(file_name: P, verbose: bool, stderr_is_terminal: bool) -> Self
    where
        P: Into<PathBuf>,
    {
        let logging = Self::new().with_debug_mode(verbose);
        if verbose && !stderr_is_terminal {
            logging
        } else {
            logging.with_file(file_name)
        }
    }

    /// Writes to `file_name`; relative names land in the project data directory.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Lowers the level from info to debug, which adds one record per key.
    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();

        // debug records pass the filter; the global max level gates them
        b.filter_level(LevelFilter::Debug);
        b.parse_default_env();

        if let Some(file_name) = &self.file_name {
            let log_file = get_log_file_path(file_name)?;

            let fd = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("A logger is already installed")?;
        Self::set_debug_mode(self.debug_mode);

        Ok(())
    }

    /// Switches debug records on or off for the running logger.
    pub fn set_debug_mode(enable: bool) {
        if env::var_os("RUST_LOG").is_none() {
            log::set_max_level(level_for(enable));
        }
    }
}

fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Resolves the log file location.
///
/// Absolute paths are used as given; anything else is placed in the
/// project data directory, which is created if needed.
fn get_log_file_path(file_name: &Path) -> Result<PathBuf> {
    if file_name.is_absolute() {
        return Ok(file_name.to_path_buf());
    }
    Ok(project_data_dir()?.join(file_name))
}
