use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::command::prepare::create_dir;
use crate::fileformat::AnalysisSettings;
use crate::runtime::Error;
use crate::utils::run_utility;

pub struct AnalyzeParams {
    pub path_mixcr: PathBuf,
    pub path_reads: Vec<PathBuf>,
    pub path_workdir: PathBuf,
    pub threads: usize,
    pub analysis: AnalysisSettings,
}

/// Where MiXCR writes its results, `<workdir>/<output_name>`
pub fn output_prefix(path_workdir: &Path, analysis: &AnalysisSettings) -> PathBuf {
    path_workdir.join(&analysis.output_name)
}

/// Arguments for `mixcr analyze`, using the preset and library installed by Prepare
pub fn analyze_args(params: &AnalyzeParams) -> Vec<OsString> {
    let analysis = &params.analysis;
    let mut args: Vec<OsString> = vec![
        format!("-Xmx{}", analysis.heap_size).into(),
        "analyze".into(),
        "-t".into(),
        params.threads.to_string().into(),
        format!("local:{}", analysis.local_preset).into(),
        "--library".into(),
        analysis.library_name.clone().into(),
    ];
    args.extend(params.path_reads.iter().map(|p| p.clone().into_os_string()));
    args.push(output_prefix(&params.path_workdir, analysis).into_os_string());
    args
}

/// Runs the MiXCR BCR analysis on the read pair
pub struct Analyze {}
impl Analyze {
    pub fn run(params: &AnalyzeParams) -> Result<(), Error> {
        create_dir(&params.path_workdir)?;

        let mut cmd = Command::new(&params.path_mixcr);
        cmd.args(analyze_args(params));
        let output = run_utility("run bcr", &mut cmd)?;
        println!("Output of run bcr command:\n{}", output);

        info!(
            "Analysis results written under {:?}",
            output_prefix(&params.path_workdir, &params.analysis)
        );
        Ok(())
    }
}
