use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::command::check_inputs;
use crate::command::{Analyze, AnalyzeParams, MixcrHome, Prepare, PrepareParams};
use crate::fileformat::RunConfig;
use crate::runtime::{Error, LogLevel};
use crate::utils::{check_mixcr_version, expand_path};

pub const USAGE: &str = "Usage: bcrun -c <config_file> -w <working_directory>";

#[derive(Args, Debug)]
pub struct RunCMD {
    /// YAML run file listing the reads, MiXCR and the reference library
    #[arg(short = 'c', value_parser = clap::value_parser!(PathBuf))]
    pub path_config: PathBuf,

    /// Working directory; MiXCR output goes to <dir>/Out
    #[arg(short = 'w', value_parser = clap::value_parser!(PathBuf))]
    pub path_workdir: PathBuf,

    /// trace, debug, info, warn, error or off. BCRUN_LOG overrides
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: LogLevel,

    /// Do not compare the configured version with `mixcr -v`
    #[arg(long = "skip-version-check")]
    pub skip_version_check: bool,
}

impl RunCMD {
    /// Resolves the user's home and runs
    pub fn try_execute(&mut self) -> Result<(), Error> {
        let home = MixcrHome::from_user()?;
        self.try_execute_with_home(home)
    }

    pub fn try_execute_with_home(&mut self, home: MixcrHome) -> Result<(), Error> {
        let path_config = expand_path(&self.path_config);
        let config = RunConfig::from_path(&path_config)?;
        info!("--- config:\n{}", config.to_yaml());

        check_inputs(&config)?;

        let path_mixcr = config.mixcr_path();
        if !self.skip_version_check && !config.version.trim().is_empty() {
            check_mixcr_version(&path_mixcr, &config.version);
        }

        Prepare::run(&PrepareParams {
            path_mixcr: path_mixcr.clone(),
            path_reference: config.reference_path(),
            home,
            analysis: config.analysis.clone(),
        })?;

        Analyze::run(&AnalyzeParams {
            path_mixcr,
            path_reads: config.read_paths(),
            path_workdir: expand_path(&self.path_workdir),
            threads: config.threads,
            analysis: config.analysis,
        })?;

        info!("bcrun has finished succesfully");
        Ok(())
    }
}
